use chrono::{Duration, Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::BankCalcError;
use crate::BankCalcResult;

/// Average Gregorian month length in days (365.25 / 12).
pub const AVERAGE_MONTH_DAYS: Decimal = dec!(30.4375);

/// Whole calendar days from `start` to `end` (negative if `end` is earlier).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

pub fn add_days(date: NaiveDate, days: i64) -> BankCalcResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| BankCalcError::DateError(format!("{date} + {days} days is out of range")))
}

/// Same day-of-month in the following calendar month, clamped to the last
/// day of that month (31 Jan -> 29 Feb in a leap year -> 29 Mar).
pub fn next_month_clamped(date: NaiveDate) -> BankCalcResult<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| BankCalcError::DateError(format!("{date} + 1 month is out of range")))
}

/// `start + period_months × 30.4375` days, truncated to a whole date.
pub fn approximate_end_date(start: NaiveDate, period_months: u32) -> BankCalcResult<NaiveDate> {
    let days = (Decimal::from(period_months) * AVERAGE_MONTH_DAYS)
        .floor()
        .to_i64()
        .ok_or_else(|| {
            BankCalcError::DateError(format!("{period_months} months is too long a period"))
        })?;
    add_days(start, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 31)), 30);
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 2, 15)), 45);
        assert_eq!(days_between(d(2024, 3, 1), d(2024, 3, 1)), 0);
        assert_eq!(days_between(d(2024, 3, 2), d(2024, 3, 1)), -1);
    }

    #[test]
    fn test_next_month_clamps_and_keeps_clamped_day() {
        let feb = next_month_clamped(d(2024, 1, 31)).unwrap();
        assert_eq!(feb, d(2024, 2, 29));
        let mar = next_month_clamped(feb).unwrap();
        assert_eq!(mar, d(2024, 3, 29));
    }

    #[test]
    fn test_next_month_non_leap_february() {
        assert_eq!(next_month_clamped(d(2023, 1, 30)).unwrap(), d(2023, 2, 28));
    }

    #[test]
    fn test_next_month_rolls_year() {
        assert_eq!(next_month_clamped(d(2024, 12, 15)).unwrap(), d(2025, 1, 15));
        assert_eq!(next_month_clamped(d(2024, 12, 31)).unwrap(), d(2025, 1, 31));
    }

    #[test]
    fn test_approximate_end_date() {
        // 1 month = 30.4375 days -> 30 whole days
        assert_eq!(approximate_end_date(d(2024, 1, 1), 1).unwrap(), d(2024, 1, 31));
        // 12 months = 365.25 days -> 365 whole days (2024 is a leap year)
        assert_eq!(approximate_end_date(d(2024, 1, 1), 12).unwrap(), d(2024, 12, 31));
        // 4 months = 121.75 days -> 121
        assert_eq!(approximate_end_date(d(2023, 1, 1), 4).unwrap(), d(2023, 5, 2));
    }
}
