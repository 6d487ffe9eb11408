use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calendar::days_between;
use crate::parse::{dmy_date, ensure_date_order, format_date};
use crate::currency::two_places;
use crate::{limits, types::*, BankCalcError, BankCalcResult};

/// Spans longer than this also report an approximate monthly figure.
const MONTHLY_APPROXIMATION_THRESHOLD_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeInput {
    #[serde(with = "dmy_date")]
    pub start_date: NaiveDate,
    #[serde(with = "dmy_date")]
    pub end_date: NaiveDate,
    pub balance: Money,
    pub annual_rate_percent: RatePercent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeOutput {
    pub elapsed_days: i64,
    /// Annual rate / 365, as a decimal.
    pub daily_rate: Rate,
    #[serde(serialize_with = "two_places::serialize")]
    pub interest_per_day: Money,
    /// Balance × annual rate / 12. Only present for spans over 30 days and
    /// not reconciled with `total_interest`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "two_places::option::serialize"
    )]
    pub approximate_monthly_interest: Option<Money>,
    #[serde(serialize_with = "two_places::serialize")]
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simple interest on a balance between two dates, actual/365.
pub fn interest_between_dates(
    input: &DateRangeInput,
) -> BankCalcResult<ComputationOutput<DateRangeOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let elapsed_days = days_between(input.start_date, input.end_date);
    tracing::debug!(
        start = %format_date(input.start_date),
        end = %format_date(input.end_date),
        elapsed_days,
        "accruing interest between dates"
    );

    let annual_rate = input.annual_rate_percent / dec!(100);
    let daily_rate = annual_rate / dec!(365);
    let interest_per_day = input.balance * daily_rate;

    let approximate_monthly_interest = (elapsed_days > MONTHLY_APPROXIMATION_THRESHOLD_DAYS)
        .then(|| input.balance * (annual_rate / dec!(12)));

    let total_interest = input.balance * daily_rate * Decimal::from(elapsed_days);

    let output = DateRangeOutput {
        elapsed_days,
        daily_rate,
        interest_per_day,
        approximate_monthly_interest,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "day_count": "actual/365",
        "monthly_approximation": "balance × rate / 12",
    });

    Ok(with_metadata(
        "Simple interest between dates (actual/365)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &DateRangeInput) -> BankCalcResult<()> {
    ensure_date_order(input.start_date, input.end_date)?;
    if input.balance < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "balance".into(),
            reason: "Balance cannot be negative.".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    limits::check_amount("balance", input.balance)?;
    limits::check_rate(input.annual_rate_percent)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(end: NaiveDate) -> DateRangeInput {
        DateRangeInput {
            start_date: d(2024, 1, 1),
            end_date: end,
            balance: dec!(100_000),
            annual_rate_percent: dec!(10),
        }
    }

    #[test]
    fn test_thirty_days_has_no_monthly_line() {
        let out = interest_between_dates(&range(d(2024, 1, 31))).unwrap().result;
        assert_eq!(out.elapsed_days, 30);
        assert_eq!(out.approximate_monthly_interest, None);
        assert_eq!(out.total_interest.round_dp(2), dec!(821.92));
        assert_eq!(out.interest_per_day.round_dp(2), dec!(27.40));
        assert_eq!(out.daily_rate.round_dp(6), dec!(0.000274));
    }

    #[test]
    fn test_long_span_reports_monthly_approximation() {
        let out = interest_between_dates(&range(d(2024, 2, 15))).unwrap().result;
        assert_eq!(out.elapsed_days, 45);
        assert_eq!(out.approximate_monthly_interest.unwrap().round_dp(2), dec!(833.33));
        assert_eq!(out.total_interest.round_dp(2), dec!(1232.88));
    }

    #[test]
    fn test_same_day_is_zero() {
        let out = interest_between_dates(&range(d(2024, 1, 1))).unwrap().result;
        assert_eq!(out.elapsed_days, 0);
        assert!(out.total_interest.is_zero());
    }

    #[test]
    fn test_leap_year_still_divides_by_365() {
        let out = interest_between_dates(&DateRangeInput {
            start_date: d(2024, 1, 1),
            end_date: d(2025, 1, 1),
            balance: dec!(36_500),
            annual_rate_percent: dec!(10),
        })
        .unwrap()
        .result;
        assert_eq!(out.elapsed_days, 366);
        assert_eq!(out.total_interest.round_dp(2), dec!(3660));
    }

    #[test]
    fn test_oversized_balance_is_an_error_not_a_panic() {
        let mut huge = range(d(2024, 12, 31));
        huge.balance = Decimal::MAX;
        huge.annual_rate_percent = dec!(200);
        let err = interest_between_dates(&huge).unwrap_err();
        assert!(matches!(err, BankCalcError::OutOfRangeValue { ref field, .. } if field == "balance"));
    }

    #[test]
    fn test_largest_balance_over_centuries_computes() {
        let out = interest_between_dates(&DateRangeInput {
            start_date: d(1, 1, 1),
            end_date: d(9999, 12, 31),
            balance: limits::MAX_AMOUNT,
            annual_rate_percent: limits::MAX_RATE_PERCENT,
        })
        .unwrap()
        .result;
        assert!(out.total_interest > limits::MAX_AMOUNT);
    }

    #[test]
    fn test_rejects_reversed_dates() {
        let err = interest_between_dates(&DateRangeInput {
            start_date: d(2024, 2, 1),
            end_date: d(2024, 1, 1),
            balance: dec!(100),
            annual_rate_percent: dec!(5),
        })
        .unwrap_err();
        assert!(matches!(err, BankCalcError::InvalidDateOrder { .. }));
    }

    #[test]
    fn test_input_dates_deserialize_day_first() {
        let input: DateRangeInput = serde_json::from_str(
            r#"{"start_date":"01-01-2024","end_date":"15-02-2024","balance":"100000","annual_rate_percent":"10"}"#,
        )
        .unwrap();
        assert_eq!(input.end_date, d(2024, 2, 15));
    }
}
