use std::io::{BufRead, Write};

use bank_calc_core::BankCalcResult;

use crate::error::{CliError, CliResult};

/// Line-oriented prompting over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print `label` and read one line, without the trailing newline.
    pub fn ask(&mut self, label: &str) -> CliResult<String> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Keep asking until `parse` accepts the answer. Each rejection prints the
    /// reason followed by `hint`.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        hint: &str,
        parse: impl Fn(&str) -> BankCalcResult<T>,
    ) -> CliResult<T> {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected input");
                    writeln!(self.writer, "Invalid input: {e}. {hint}")?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
