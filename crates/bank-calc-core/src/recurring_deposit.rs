use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::calendar::{add_days, approximate_end_date, days_between, next_month_clamped};
use crate::parse::{dmy_date, format_date};
use crate::currency::two_places;
use crate::{limits, types::*, BankCalcError, BankCalcResult};

/// Extra iterations allowed beyond `period_months × multiplier`.
const SAFETY_SLACK: u32 = 5;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl DepositFrequency {
    /// The next scheduled deposit date after `date`.
    pub fn advance(self, date: NaiveDate) -> BankCalcResult<NaiveDate> {
        match self {
            DepositFrequency::Daily => add_days(date, 1),
            DepositFrequency::Weekly => add_days(date, 7),
            DepositFrequency::Monthly => next_month_clamped(date),
        }
    }

    /// Upper bound on deposits per month, used for the iteration guard.
    /// Each value exceeds the real rate (30.4375, 4.35 and 1 per month).
    fn max_per_month(self) -> u32 {
        match self {
            DepositFrequency::Daily => 31,
            DepositFrequency::Weekly => 5,
            DepositFrequency::Monthly => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DepositFrequency::Daily => "Daily",
            DepositFrequency::Weekly => "Weekly",
            DepositFrequency::Monthly => "Monthly",
        }
    }
}

impl FromStr for DepositFrequency {
    type Err = BankCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(DepositFrequency::Daily),
            "weekly" => Ok(DepositFrequency::Weekly),
            "monthly" => Ok(DepositFrequency::Monthly),
            other => Err(BankCalcError::InvalidSelection {
                input: other.to_string(),
                allowed: "Daily, Weekly, Monthly".into(),
            }),
        }
    }
}

impl fmt::Display for DepositFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositInput {
    #[serde(with = "dmy_date")]
    pub start_date: NaiveDate,
    pub deposit_amount: Money,
    pub frequency: DepositFrequency,
    pub annual_rate_percent: RatePercent,
    pub period_months: u32,
}

/// A single collection and the simple interest it earns until the end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositEntry {
    #[serde(with = "dmy_date")]
    pub deposit_date: NaiveDate,
    pub days_held: i64,
    #[serde(serialize_with = "two_places::serialize")]
    pub interest_accrued: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositSummary {
    /// Start plus `period_months × 30.4375` days.
    #[serde(with = "dmy_date")]
    pub end_date: NaiveDate,
    pub deposit_count: u32,
    #[serde(serialize_with = "two_places::serialize")]
    pub total_principal_deposited: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub total_interest_accrued: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub maturity_value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositOutput {
    pub schedule: Vec<RecurringDepositEntry>,
    pub summary: RecurringDepositSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Accrue simple daily interest on every scheduled deposit from its own date
/// to the approximate end of the period.
pub fn recurring_accrual(
    input: &RecurringDepositInput,
) -> BankCalcResult<ComputationOutput<RecurringDepositOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let end_date = approximate_end_date(input.start_date, input.period_months)?;
    let daily_rate = input.annual_rate_percent / dec!(100) / dec!(365);
    let max_iterations = input
        .period_months
        .saturating_mul(input.frequency.max_per_month())
        .saturating_add(SAFETY_SLACK);

    tracing::debug!(
        start = %format_date(input.start_date),
        end = %format_date(end_date),
        frequency = %input.frequency,
        max_iterations,
        "building recurring deposit schedule"
    );

    let mut schedule = Vec::new();
    let mut current = input.start_date;
    let mut iterations: u32 = 0;

    while current <= end_date {
        let days_held = days_between(current, end_date).max(0);
        schedule.push(RecurringDepositEntry {
            deposit_date: current,
            days_held,
            interest_accrued: input.deposit_amount * daily_rate * Decimal::from(days_held),
        });

        current = input.frequency.advance(current)?;
        iterations += 1;

        if iterations > max_iterations {
            if current <= end_date {
                tracing::warn!(
                    iterations,
                    next = %format_date(current),
                    "recurring deposit iteration bound reached before end date"
                );
                warnings.push(format!(
                    "Schedule stopped after {iterations} deposits; {} onwards not included",
                    format_date(current)
                ));
            }
            break;
        }
    }

    let summary = summarize(input.deposit_amount, end_date, &schedule);

    let output = RecurringDepositOutput { schedule, summary };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "day_count": "actual/365",
        "average_month_days": "30.4375",
        "end_date": format_date(end_date),
    });

    Ok(with_metadata(
        "Recurring deposit simple daily accrual",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn summarize(
    deposit_amount: Money,
    end_date: NaiveDate,
    schedule: &[RecurringDepositEntry],
) -> RecurringDepositSummary {
    let deposit_count = schedule.len() as u32;
    let total_principal_deposited = deposit_amount * Decimal::from(deposit_count);
    let total_interest_accrued: Money = schedule.iter().map(|e| e.interest_accrued).sum();

    RecurringDepositSummary {
        end_date,
        deposit_count,
        total_principal_deposited,
        total_interest_accrued,
        maturity_value: total_principal_deposited + total_interest_accrued,
    }
}

fn validate_input(input: &RecurringDepositInput) -> BankCalcResult<()> {
    if input.deposit_amount <= Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "deposit_amount".into(),
            reason: "Collection amount must be positive.".into(),
        });
    }
    if input.period_months == 0 {
        return Err(BankCalcError::OutOfRangeValue {
            field: "period_months".into(),
            reason: "Period must be a positive number of months.".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    limits::check_amount("deposit_amount", input.deposit_amount)?;
    limits::check_months("period_months", input.period_months)?;
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

    fn input(start: NaiveDate, frequency: DepositFrequency, months: u32) -> RecurringDepositInput {
        // 3.65% a year is exactly 0.01% a day
        RecurringDepositInput {
            start_date: start,
            deposit_amount: dec!(100),
            frequency,
            annual_rate_percent: dec!(3.65),
            period_months: months,
        }
    }

    #[test]
    fn test_daily_deposits_one_month() {
        let out = recurring_accrual(&input(d(2024, 1, 1), DepositFrequency::Daily, 1))
            .unwrap()
            .result;
        // end = 1 Jan + 30 days, inclusive of both ends
        assert_eq!(out.summary.end_date, d(2024, 1, 31));
        assert_eq!(out.schedule.len(), 31);
        assert_eq!(out.schedule[0].days_held, 30);
        assert_eq!(out.schedule[0].interest_accrued, dec!(0.30));
        assert_eq!(out.schedule[30].days_held, 0);
        assert!(out.schedule[30].interest_accrued.is_zero());

        // 0.01 × (30 + 29 + ... + 0) = 0.01 × 465
        assert_eq!(out.summary.total_interest_accrued, dec!(4.65));
        assert_eq!(out.summary.total_principal_deposited, dec!(3100));
        assert_eq!(out.summary.maturity_value, dec!(3104.65));
    }

    #[test]
    fn test_weekly_deposits_one_month() {
        let out = recurring_accrual(&input(d(2024, 1, 1), DepositFrequency::Weekly, 1))
            .unwrap()
            .result;
        let dates: Vec<NaiveDate> = out.schedule.iter().map(|e| e.deposit_date).collect();
        assert_eq!(
            dates,
            vec![d(2024, 1, 1), d(2024, 1, 8), d(2024, 1, 15), d(2024, 1, 22), d(2024, 1, 29)]
        );
        let held: Vec<i64> = out.schedule.iter().map(|e| e.days_held).collect();
        assert_eq!(held, vec![30, 23, 16, 9, 2]);
        assert_eq!(out.summary.total_interest_accrued, dec!(0.80));
    }

    #[test]
    fn test_monthly_steps_clamp_from_month_end() {
        let out = recurring_accrual(&input(d(2024, 1, 31), DepositFrequency::Monthly, 12))
            .unwrap();
        let schedule = &out.result.schedule;
        assert_eq!(schedule[1].deposit_date, d(2024, 2, 29));
        assert_eq!(schedule[2].deposit_date, d(2024, 3, 29));
        assert_eq!(schedule[11].deposit_date, d(2024, 12, 29));

        // 365 days after 31 Jan 2024 is 30 Jan 2025, so 29 Jan 2025 still counts
        assert_eq!(out.result.summary.end_date, d(2025, 1, 30));
        assert_eq!(schedule.len(), 13);
        assert_eq!(schedule[12].deposit_date, d(2025, 1, 29));
        assert_eq!(schedule[12].days_held, 1);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_safety_bound_never_trips_for_long_weekly_periods() {
        let out = recurring_accrual(&input(d(2020, 1, 1), DepositFrequency::Weekly, 120))
            .unwrap();
        assert!(out.warnings.is_empty());
        let last = out.result.schedule.last().unwrap();
        assert!(last.deposit_date <= out.result.summary.end_date);
        assert!(last.deposit_date + chrono::Duration::days(7) > out.result.summary.end_date);
    }

    #[test]
    fn test_entries_are_strictly_increasing() {
        let out = recurring_accrual(&input(d(2023, 11, 30), DepositFrequency::Monthly, 6))
            .unwrap()
            .result;
        assert!(out
            .schedule
            .windows(2)
            .all(|w| w[0].deposit_date < w[1].deposit_date));
        assert_eq!(
            out.summary.total_principal_deposited,
            dec!(100) * Decimal::from(out.summary.deposit_count)
        );
    }

    #[test]
    fn test_frequency_parsing_is_case_insensitive() {
        assert_eq!("WEEKLY".parse::<DepositFrequency>().unwrap(), DepositFrequency::Weekly);
        assert_eq!(" monthly ".parse::<DepositFrequency>().unwrap(), DepositFrequency::Monthly);
        assert!(matches!(
            "fortnightly".parse::<DepositFrequency>().unwrap_err(),
            BankCalcError::InvalidSelection { .. }
        ));
    }

    #[test]
    fn test_rejects_zero_period_and_amount() {
        let mut bad = input(d(2024, 1, 1), DepositFrequency::Daily, 0);
        assert!(recurring_accrual(&bad).is_err());
        bad.period_months = 1;
        bad.deposit_amount = Decimal::ZERO;
        assert!(recurring_accrual(&bad).is_err());
    }

    #[test]
    fn test_oversized_inputs_are_errors_not_panics() {
        let mut huge = input(d(2024, 1, 1), DepositFrequency::Daily, 12);
        huge.deposit_amount = Decimal::MAX;
        huge.annual_rate_percent = dec!(200);
        let err = recurring_accrual(&huge).unwrap_err();
        assert!(matches!(err, BankCalcError::OutOfRangeValue { ref field, .. } if field == "deposit_amount"));

        let long = input(d(2024, 1, 1), DepositFrequency::Daily, limits::MAX_MONTHS + 1);
        assert!(recurring_accrual(&long).is_err());
    }

    #[test]
    fn test_largest_accepted_inputs_compute() {
        let mut big = input(d(2024, 1, 1), DepositFrequency::Daily, limits::MAX_MONTHS);
        big.deposit_amount = limits::MAX_AMOUNT;
        big.annual_rate_percent = limits::MAX_RATE_PERCENT;
        let out = recurring_accrual(&big).unwrap();
        // 1200 × 30.4375 = 36,525 days, inclusive of both ends
        assert_eq!(out.result.schedule.len(), 36_526);
        assert!(out.warnings.is_empty());
    }
}
