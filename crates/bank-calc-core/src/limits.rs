//! Upper bounds on user-supplied figures.
//!
//! The parsers and every engine's `validate_input` check against these, so
//! the largest product an engine forms (amount × rate × days) stays far
//! inside `Decimal` range and a schedule never holds more than
//! `MAX_MONTHS × 31` rows.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::BankCalcError;
use crate::types::{Money, RatePercent};
use crate::BankCalcResult;

/// One thousand trillion rupees.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000_000);

pub const MAX_RATE_PERCENT: RatePercent = dec!(1000);

/// A hundred years of monthly periods.
pub const MAX_MONTHS: u32 = 1200;

pub fn check_amount(field: &str, value: Money) -> BankCalcResult<()> {
    if value > MAX_AMOUNT {
        return Err(BankCalcError::OutOfRangeValue {
            field: field.into(),
            reason: format!("cannot exceed {MAX_AMOUNT}"),
        });
    }
    Ok(())
}

pub fn check_rate(value: RatePercent) -> BankCalcResult<()> {
    if value > MAX_RATE_PERCENT {
        return Err(BankCalcError::OutOfRangeValue {
            field: "annual_rate_percent".into(),
            reason: format!("cannot exceed {MAX_RATE_PERCENT}%"),
        });
    }
    Ok(())
}

pub fn check_months(field: &str, value: u32) -> BankCalcResult<()> {
    if value > MAX_MONTHS {
        return Err(BankCalcError::OutOfRangeValue {
            field: field.into(),
            reason: format!("cannot exceed {MAX_MONTHS} months"),
        });
    }
    Ok(())
}
