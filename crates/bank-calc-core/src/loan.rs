use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::currency::two_places;
use crate::{limits, types::*, BankCalcError, BankCalcResult};

/// Balances below this are treated as fully repaid.
const BALANCE_EPSILON: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub term_months: u32,
    pub annual_rate_percent: RatePercent,
}

/// One month of the repayment schedule. Every figure is rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub period: u32,
    #[serde(serialize_with = "two_places::serialize")]
    pub principal_portion: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub interest_portion: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub total_payment: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub remaining_balance: Money,
}

/// Sums of the rounded row figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    #[serde(serialize_with = "two_places::serialize")]
    pub total_principal: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub total_interest: Money,
    #[serde(serialize_with = "two_places::serialize")]
    pub total_payment: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationOutput {
    /// Principal repaid every month (principal / term), unrounded.
    #[serde(serialize_with = "two_places::serialize")]
    pub fixed_installment: Money,
    pub monthly_rate: Rate,
    pub schedule: Vec<AmortizationRow>,
    pub summary: AmortizationSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Amortize a loan with the reducing-balance method: an equal principal
/// installment every month plus interest on the balance still outstanding.
pub fn amortize(input: &LoanInput) -> BankCalcResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    tracing::debug!(
        principal = %input.principal,
        term_months = input.term_months,
        rate = %input.annual_rate_percent,
        "amortizing loan"
    );

    let term = Decimal::from(input.term_months);
    let fixed_installment = input.principal / term;
    let monthly_rate = input.annual_rate_percent / dec!(100) / dec!(12);

    let mut balance = input.principal;
    let mut schedule = Vec::with_capacity(input.term_months as usize);

    for period in 1..=input.term_months {
        let interest = balance * monthly_rate;
        let payment = fixed_installment + interest;

        balance -= fixed_installment;
        if balance < BALANCE_EPSILON {
            balance = Decimal::ZERO;
        }

        schedule.push(AmortizationRow {
            period,
            principal_portion: fixed_installment.round_dp(2),
            interest_portion: interest.round_dp(2),
            total_payment: payment.round_dp(2),
            remaining_balance: balance.round_dp(2),
        });
    }

    let summary = summarize(&schedule);

    if summary.total_principal != input.principal {
        warnings.push(format!(
            "Rounded installments sum to {} against a principal of {}",
            summary.total_principal, input.principal
        ));
    }
    if input.annual_rate_percent.is_zero() {
        warnings.push("Zero interest rate: payments are principal only".into());
    }

    let output = AmortizationOutput {
        fixed_installment,
        monthly_rate,
        schedule,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "monthly_rate": monthly_rate.to_string(),
        "rounding": "each row rounded to 2 dp before totalling",
    });

    Ok(with_metadata(
        "Reducing balance, equal principal installments",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn summarize(schedule: &[AmortizationRow]) -> AmortizationSummary {
    schedule.iter().fold(
        AmortizationSummary {
            total_principal: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_payment: Decimal::ZERO,
        },
        |mut acc, row| {
            acc.total_principal += row.principal_portion;
            acc.total_interest += row.interest_portion;
            acc.total_payment += row.total_payment;
            acc
        },
    )
}

fn validate_input(input: &LoanInput) -> BankCalcResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "principal".into(),
            reason: "Loan amount must be positive.".into(),
        });
    }
    if input.term_months == 0 {
        return Err(BankCalcError::OutOfRangeValue {
            field: "term_months".into(),
            reason: "Term must be positive.".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(BankCalcError::OutOfRangeValue {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    limits::check_amount("principal", input.principal)?;
    limits::check_months("term_months", input.term_months)?;
    limits::check_rate(input.annual_rate_percent)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
