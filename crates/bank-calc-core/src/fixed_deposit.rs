use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::currency::two_places;
use crate::{limits, types::*, BankCalcError, BankCalcResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// How the deposit's interest reaches the depositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMode {
    /// Simple interest added to the principal when the deposit matures.
    AtMaturity,
    /// Interest transferred to a savings account every month.
    MonthlyPayout,
}

impl PayoutMode {
    /// Menu selection: `1` for maturity, `2` for monthly payout.
    pub fn from_choice(choice: &str) -> BankCalcResult<Self> {
        match choice.trim() {
            "1" => Ok(PayoutMode::AtMaturity),
            "2" => Ok(PayoutMode::MonthlyPayout),
            other => Err(BankCalcError::InvalidSelection {
                input: other.to_string(),
                allowed: "1, 2".into(),
            }),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PayoutMode::AtMaturity => "Interest added with FD on maturity",
            PayoutMode::MonthlyPayout => "Monthly interest transferred to savings account",
        }
    }
}

impl FromStr for PayoutMode {
    type Err = BankCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maturity" | "at_maturity" | "1" => Ok(PayoutMode::AtMaturity),
            "monthly" | "monthly_payout" | "2" => Ok(PayoutMode::MonthlyPayout),
            other => Err(BankCalcError::InvalidSelection {
                input: other.to_string(),
                allowed: "maturity, monthly".into(),
            }),
        }
    }
}

impl fmt::Display for PayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: Money,
    pub annual_rate_percent: RatePercent,
    pub tenure_months: u32,
    pub payout_mode: PayoutMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "payout_mode", rename_all = "snake_case")]
pub enum FdOutcome {
    AtMaturity {
        #[serde(serialize_with = "two_places::serialize")]
        interest_earned: Money,
        #[serde(serialize_with = "two_places::serialize")]
        maturity_amount: Money,
    },
    MonthlyPayout {
        #[serde(serialize_with = "two_places::serialize")]
        monthly_interest: Money,
        #[serde(serialize_with = "two_places::serialize")]
        total_interest_earned: Money,
        /// Always the principal: the interest was already paid out.
        #[serde(serialize_with = "two_places::serialize")]
        maturity_amount: Money,
    },
}

impl FdOutcome {
    pub fn total_interest(&self) -> Money {
        match self {
            FdOutcome::AtMaturity { interest_earned, .. } => *interest_earned,
            FdOutcome::MonthlyPayout {
                total_interest_earned,
                ..
            } => *total_interest_earned,
        }
    }

    pub fn maturity_amount(&self) -> Money {
        match self {
            FdOutcome::AtMaturity { maturity_amount, .. }
            | FdOutcome::MonthlyPayout { maturity_amount, .. } => *maturity_amount,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simple (non-compounding) fixed-deposit interest for either payout mode.
pub fn calculate_fd(input: &FdInput) -> BankCalcResult<ComputationOutput<FdOutcome>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    tracing::debug!(
        principal = %input.principal,
        tenure_months = input.tenure_months,
        mode = ?input.payout_mode,
        "calculating fixed deposit"
    );

    let tenure = Decimal::from(input.tenure_months);
    let annual_rate = input.annual_rate_percent / dec!(100);

    let outcome = match input.payout_mode {
        PayoutMode::AtMaturity => {
            let interest_earned = input.principal * annual_rate * (tenure / dec!(12));
            FdOutcome::AtMaturity {
                interest_earned,
                maturity_amount: input.principal + interest_earned,
            }
        }
        PayoutMode::MonthlyPayout => {
            let monthly_interest = input.principal * (annual_rate / dec!(12));
            FdOutcome::MonthlyPayout {
                monthly_interest,
                total_interest_earned: monthly_interest * tenure,
                maturity_amount: input.principal,
            }
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "compounding": "none",
        "tenure_years": (tenure / dec!(12)).to_string(),
    });

    Ok(with_metadata(
        "Fixed deposit simple interest",
        &assumptions,
        warnings,
        elapsed,
        outcome,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &FdInput) -> BankCalcResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "principal".into(),
            reason: "Principal amount must be positive.".into(),
        });
    }
    if input.tenure_months == 0 {
        return Err(BankCalcError::OutOfRangeValue {
            field: "tenure_months".into(),
            reason: "Tenure must be positive.".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    limits::check_amount("principal", input.principal)?;
    limits::check_months("tenure_months", input.tenure_months)?;
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

    fn fd(principal: Decimal, rate: Decimal, tenure: u32, mode: PayoutMode) -> FdInput {
        FdInput {
            principal,
            annual_rate_percent: rate,
            tenure_months: tenure,
            payout_mode: mode,
        }
    }

    #[test]
    fn test_at_maturity() {
        let out = calculate_fd(&fd(dec!(100_000), dec!(10), 12, PayoutMode::AtMaturity)).unwrap();
        assert_eq!(
            out.result,
            FdOutcome::AtMaturity {
                interest_earned: dec!(10_000),
                maturity_amount: dec!(110_000),
            }
        );
    }

    #[test]
    fn test_at_maturity_partial_year() {
        // 7% for 18 months on 50k = 50k × 0.07 × 1.5
        let out = calculate_fd(&fd(dec!(50_000), dec!(7), 18, PayoutMode::AtMaturity)).unwrap();
        assert_eq!(out.result.total_interest(), dec!(5250));
        assert_eq!(out.result.maturity_amount(), dec!(55_250));
    }

    #[test]
    fn test_monthly_payout_keeps_principal() {
        let out =
            calculate_fd(&fd(dec!(100_000), dec!(12), 12, PayoutMode::MonthlyPayout)).unwrap();
        assert_eq!(
            out.result,
            FdOutcome::MonthlyPayout {
                monthly_interest: dec!(1000),
                total_interest_earned: dec!(12_000),
                maturity_amount: dec!(100_000),
            }
        );
    }

    #[test]
    fn test_choice_and_name_parsing() {
        assert_eq!(PayoutMode::from_choice("1").unwrap(), PayoutMode::AtMaturity);
        assert_eq!(PayoutMode::from_choice(" 2 ").unwrap(), PayoutMode::MonthlyPayout);
        assert!(matches!(
            PayoutMode::from_choice("3").unwrap_err(),
            BankCalcError::InvalidSelection { .. }
        ));
        assert_eq!("Monthly".parse::<PayoutMode>().unwrap(), PayoutMode::MonthlyPayout);
        assert!("quarterly".parse::<PayoutMode>().is_err());
    }

    #[test]
    fn test_outcome_serializes_with_mode_tag() {
        let out = calculate_fd(&fd(dec!(1000), dec!(12), 1, PayoutMode::MonthlyPayout)).unwrap();
        let json = serde_json::to_value(&out.result).unwrap();
        assert_eq!(json["payout_mode"], "monthly_payout");
        assert_eq!(json["maturity_amount"], "1000.00");
        assert_eq!(json["monthly_interest"], "10.00");
    }

    #[test]
    fn test_oversized_inputs_are_errors_not_panics() {
        let err = calculate_fd(&fd(Decimal::MAX, dec!(200), 12, PayoutMode::AtMaturity)).unwrap_err();
        assert!(matches!(err, BankCalcError::OutOfRangeValue { ref field, .. } if field == "principal"));
        assert!(calculate_fd(&fd(dec!(1000), dec!(5000), 12, PayoutMode::MonthlyPayout)).is_err());

        // the largest accepted figures still compute
        let out = calculate_fd(&fd(
            limits::MAX_AMOUNT,
            limits::MAX_RATE_PERCENT,
            limits::MAX_MONTHS,
            PayoutMode::AtMaturity,
        ))
        .unwrap();
        assert_eq!(out.result.total_interest(), limits::MAX_AMOUNT * dec!(1000));
    }

    #[test]
    fn test_rejects_zero_tenure() {
        assert!(calculate_fd(&fd(dec!(1000), dec!(5), 0, PayoutMode::AtMaturity)).is_err());
    }
}
