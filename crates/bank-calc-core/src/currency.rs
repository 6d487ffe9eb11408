//! Rupee formatting using the Indian numbering system.
//!
//! The rightmost three integer digits form one group and every remaining
//! pair of digits forms another, so `1234567.8` renders as `₹12,34,567.80`.

use rust_decimal::Decimal;

use crate::error::BankCalcError;
use crate::types::Money;
use crate::BankCalcResult;

pub const RUPEE_SYMBOL: &str = "₹";

/// Render `amount` as rupees with two decimal places and lakh/crore grouping.
///
/// Negative amounts are rejected: every amount reaching the formatter has
/// already been validated as non-negative.
pub fn format_inr(amount: Money) -> BankCalcResult<String> {
    if amount < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "amount".into(),
            reason: format!("cannot format negative amount {amount} as rupees"),
        });
    }

    let rendered = format!("{:.2}", amount.round_dp(2));
    let (integer_part, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    Ok(format!(
        "{RUPEE_SYMBOL}{}.{fraction}",
        group_indian(integer_part)
    ))
}

/// Round to paise and fix the scale at two places, so `1000` displays as
/// `1000.00` and `821.917808...` as `821.92`.
pub fn round_money(amount: Money) -> Money {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// `serialize_with` adapters for monetary output fields. Engines keep full
/// precision in memory; every serialized amount is rounded to two places.
pub mod two_places {
    use serde::Serializer;

    use crate::types::Money;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::round_money(*amount).to_string())
    }

    pub mod option {
        use serde::Serializer;

        use crate::types::Money;

        pub fn serialize<S: Serializer>(
            amount: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match amount {
                Some(amount) => super::serialize(amount, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Insert commas into a string of integer digits: last three, then pairs.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut remaining = rest;
    while remaining.len() > 2 {
        let (head, pair) = remaining.split_at(remaining.len() - 2);
        groups.push(pair);
        remaining = head;
    }
    groups.push(remaining);
    groups.reverse();

    format!("{},{last_three}", groups.join(","))
}
