pub mod calendar;
pub mod currency;
pub mod error;
pub mod limits;
pub mod parse;
pub mod types;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "fixed_deposit")]
pub mod fixed_deposit;

#[cfg(feature = "date_interest")]
pub mod date_interest;

#[cfg(feature = "recurring_deposit")]
pub mod recurring_deposit;

pub use error::BankCalcError;
pub use types::*;

/// Standard result type for all bank-calc operations
pub type BankCalcResult<T> = Result<T, BankCalcError>;
