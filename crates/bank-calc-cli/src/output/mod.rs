pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod report;
pub mod table;

use std::io;

use crate::commands::Calculation;
use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(
    format: &OutputFormat,
    calculation: &Calculation,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Report => {
            let stdout = io::stdout();
            report::render(&mut stdout.lock(), calculation)?;
        }
        OutputFormat::Json => json::print_json(&calculation.to_value()?),
        OutputFormat::Table => table::print_table(&calculation.to_value()?),
        OutputFormat::Csv => csv_out::print_csv(&calculation.to_value()?),
        OutputFormat::Minimal => minimal::print_minimal(&calculation.to_value()?),
    }
    Ok(())
}
