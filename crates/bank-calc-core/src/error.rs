use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankCalcError {
    #[error("Invalid number: '{input}' is not a valid {expected}")]
    InvalidNumberFormat { input: String, expected: String },

    #[error("Out of range: {field} — {reason}")]
    OutOfRangeValue { field: String, reason: String },

    #[error("Invalid date: '{input}' does not match DD-MM-YYYY")]
    InvalidDateFormat { input: String },

    #[error("Invalid date order: end date {end} is before start date {start}")]
    InvalidDateOrder { start: String, end: String },

    #[error("Invalid selection: '{input}' (expected one of {allowed})")]
    InvalidSelection { input: String, allowed: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BankCalcError {
    fn from(e: serde_json::Error) -> Self {
        BankCalcError::SerializationError(e.to_string())
    }
}
