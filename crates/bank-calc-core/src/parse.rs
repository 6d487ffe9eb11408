//! Validate-then-construct parsing of user-entered text.
//!
//! Each function turns one raw string into a typed, range-checked value or a
//! [`BankCalcError`] describing why it was rejected. Callers decide whether
//! to re-prompt.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::BankCalcError;
use crate::limits;
use crate::types::{Money, RatePercent};
use crate::BankCalcResult;

/// The one date convention accepted everywhere: day-month-year.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a decimal, ignoring surrounding whitespace and thousands separators
/// (`1,00,000` and `100,000` are both one lakh).
pub fn parse_decimal(text: &str) -> BankCalcResult<Decimal> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| BankCalcError::InvalidNumberFormat {
            input: text.trim().to_string(),
            expected: "number".into(),
        })
}

/// A strictly positive amount (loan principal, FD principal, deposit).
pub fn parse_positive_amount(field: &str, text: &str) -> BankCalcResult<Money> {
    let value = parse_decimal(text)?;
    if value <= Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: field.into(),
            reason: "must be positive".into(),
        });
    }
    limits::check_amount(field, value)?;
    Ok(value)
}

/// A non-negative amount (an account balance may be zero).
pub fn parse_non_negative_amount(field: &str, text: &str) -> BankCalcResult<Money> {
    let value = parse_decimal(text)?;
    if value < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: field.into(),
            reason: "cannot be negative".into(),
        });
    }
    limits::check_amount(field, value)?;
    Ok(value)
}

/// Annual interest rate in percent; zero is allowed, negative is not.
pub fn parse_rate_percent(text: &str) -> BankCalcResult<RatePercent> {
    let value = parse_decimal(text)?;
    if value < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "annual_rate_percent".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    limits::check_rate(value)?;
    Ok(value)
}

/// A positive whole number of months. Fractions such as `12.5` are rejected.
pub fn parse_months(field: &str, text: &str) -> BankCalcResult<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| BankCalcError::InvalidNumberFormat {
        input: trimmed.to_string(),
        expected: "whole number".into(),
    })?;
    if value <= 0 {
        return Err(BankCalcError::OutOfRangeValue {
            field: field.into(),
            reason: "must be a positive whole number".into(),
        });
    }
    let months = u32::try_from(value).map_err(|_| BankCalcError::OutOfRangeValue {
        field: field.into(),
        reason: format!("{value} is too large"),
    })?;
    limits::check_months(field, months)?;
    Ok(months)
}

pub fn parse_date(text: &str) -> BankCalcResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| BankCalcError::InvalidDateFormat {
        input: trimmed.to_string(),
    })
}

/// Parse an end date and require it to fall on or after `start`.
pub fn parse_end_date(start: NaiveDate, text: &str) -> BankCalcResult<NaiveDate> {
    let end = parse_date(text)?;
    ensure_date_order(start, end)?;
    Ok(end)
}

pub fn ensure_date_order(start: NaiveDate, end: NaiveDate) -> BankCalcResult<()> {
    if end < start {
        return Err(BankCalcError::InvalidDateOrder {
            start: format_date(start),
            end: format_date(end),
        });
    }
    Ok(())
}

/// `yes`/`y` or `no`/`n`, case-insensitive.
pub fn parse_yes_no(text: &str) -> BankCalcResult<bool> {
    match text.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        other => Err(BankCalcError::InvalidSelection {
            input: other.to_string(),
            allowed: "yes, no".into(),
        }),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter so JSON inputs and outputs use the same DD-MM-YYYY
/// convention as the prompts.
pub mod dmy_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}
