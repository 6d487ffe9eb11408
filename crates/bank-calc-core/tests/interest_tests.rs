use bank_calc_core::currency::format_inr;
use bank_calc_core::date_interest::{self, DateRangeInput};
use bank_calc_core::parse;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

// ===========================================================================
// Interest between dates tests
// ===========================================================================

fn input(start: &str, end: &str) -> DateRangeInput {
    let start_date = parse::parse_date(start).unwrap();
    DateRangeInput {
        start_date,
        end_date: parse::parse_end_date(start_date, end).unwrap(),
        balance: parse::parse_non_negative_amount("balance", "1,00,000").unwrap(),
        annual_rate_percent: parse::parse_rate_percent("10").unwrap(),
    }
}

#[test]
fn test_january_accrual_from_parsed_text() {
    let out = date_interest::interest_between_dates(&input("01-01-2024", "31-01-2024"))
        .unwrap()
        .result;
    assert_eq!(out.elapsed_days, 30);
    assert_eq!(format_inr(out.total_interest).unwrap(), "₹821.92");
    assert_eq!(format_inr(out.interest_per_day).unwrap(), "₹27.40");
    assert!(out.approximate_monthly_interest.is_none());
}

#[test]
fn test_forty_five_days_includes_monthly_approximation() {
    let out = date_interest::interest_between_dates(&input("01-01-2024", "15-02-2024"))
        .unwrap()
        .result;
    assert_eq!(out.elapsed_days, 45);
    let monthly = out.approximate_monthly_interest.unwrap();
    assert_eq!(format_inr(monthly).unwrap(), "₹833.33");
    // The monthly line is informational; the total comes from the daily rate
    assert_eq!(out.total_interest, out.interest_per_day * rust_decimal::Decimal::from(45));
}

#[test]
fn test_thirty_one_days_is_first_span_with_monthly_line() {
    let out = date_interest::interest_between_dates(&input("01-03-2024", "01-04-2024"))
        .unwrap()
        .result;
    assert_eq!(out.elapsed_days, 31);
    assert!(out.approximate_monthly_interest.is_some());
}

#[test]
fn test_zero_balance_accrues_nothing() {
    let out = date_interest::interest_between_dates(&DateRangeInput {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        balance: dec!(0),
        annual_rate_percent: dec!(8),
    })
    .unwrap()
    .result;
    assert!(out.total_interest.is_zero());
}

#[test]
fn test_interest_is_idempotent() {
    let i = input("10-10-2023", "10-04-2024");
    let a = date_interest::interest_between_dates(&i).unwrap().result;
    let b = date_interest::interest_between_dates(&i).unwrap().result;
    assert_eq!(a, b);
}

#[test]
fn test_serialized_amounts_are_rounded_to_paise() {
    let out = date_interest::interest_between_dates(&input("01-01-2024", "15-02-2024")).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["total_interest"], "1232.88");
    assert_eq!(json["result"]["interest_per_day"], "27.40");
    assert_eq!(json["result"]["approximate_monthly_interest"], "833.33");
    // in-memory figures keep full precision
    assert!(out.result.total_interest.scale() > 2);
}
