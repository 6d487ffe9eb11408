pub mod deposit;
pub mod fixed_deposit;
pub mod interest;
pub mod loan;

use bank_calc_core::date_interest::{DateRangeInput, DateRangeOutput};
use bank_calc_core::fixed_deposit::{FdInput, FdOutcome};
use bank_calc_core::loan::{AmortizationOutput, LoanInput};
use bank_calc_core::parse;
use bank_calc_core::recurring_deposit::{RecurringDepositInput, RecurringDepositOutput};
use bank_calc_core::{BankCalcResult, ComputationOutput, Money, RatePercent};
use serde_json::Value;

/// A finished calculation together with the input that produced it, so the
/// report renderer can echo the request alongside the figures.
#[derive(Debug, Clone)]
pub enum Calculation {
    Loan {
        input: LoanInput,
        output: ComputationOutput<AmortizationOutput>,
        show_schedule: bool,
    },
    FixedDeposit {
        input: FdInput,
        output: ComputationOutput<FdOutcome>,
    },
    Interest {
        input: DateRangeInput,
        output: ComputationOutput<DateRangeOutput>,
    },
    Deposit {
        input: RecurringDepositInput,
        output: ComputationOutput<RecurringDepositOutput>,
    },
}

impl Calculation {
    /// The output envelope as JSON, for the machine-readable formats.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Calculation::Loan { output, .. } => serde_json::to_value(output),
            Calculation::FixedDeposit { output, .. } => serde_json::to_value(output),
            Calculation::Interest { output, .. } => serde_json::to_value(output),
            Calculation::Deposit { output, .. } => serde_json::to_value(output),
        }
    }
}

// Flag parsers. These share the prompt validation so `--principal 1,00,000`
// is accepted and `--rate -1` is rejected by clap before any engine runs.

pub(crate) fn positive_amount(s: &str) -> BankCalcResult<Money> {
    parse::parse_positive_amount("amount", s)
}

pub(crate) fn non_negative_amount(s: &str) -> BankCalcResult<Money> {
    parse::parse_non_negative_amount("balance", s)
}

pub(crate) fn rate_percent(s: &str) -> BankCalcResult<RatePercent> {
    parse::parse_rate_percent(s)
}

pub(crate) fn months(s: &str) -> BankCalcResult<u32> {
    parse::parse_months("months", s)
}

fn missing(flag: &str) -> String {
    format!("{flag} is required (or provide --input)")
}
