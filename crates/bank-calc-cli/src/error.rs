use std::io;

use bank_calc_core::BankCalcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The input stream closed while a prompt was waiting.
    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Calculation(#[from] BankCalcError),
}

pub type CliResult<T> = Result<T, CliError>;
