use clap::Args;
use rust_decimal::Decimal;

use bank_calc_core::fixed_deposit::{self, FdInput, PayoutMode};

use super::{missing, months, positive_amount, rate_percent, Calculation};
use crate::input;

/// Arguments for the fixed deposit calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FdArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit principal
    #[arg(long, value_parser = positive_amount)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, value_parser = rate_percent)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long, value_parser = months)]
    pub tenure_months: Option<u32>,

    /// Payout mode: `maturity` (interest added at maturity) or `monthly`
    #[arg(long, default_value = "maturity")]
    pub mode: PayoutMode,
}

pub fn run_fd(args: FdArgs) -> Result<Calculation, Box<dyn std::error::Error>> {
    let fd_input: FdInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.principal.is_none() && args.rate.is_none() && args.tenure_months.is_none() {
        input::stdin::read_stdin()?
            .ok_or_else(|| missing("--principal, --rate and --tenure-months"))?
    } else {
        FdInput {
            principal: args.principal.ok_or_else(|| missing("--principal"))?,
            annual_rate_percent: args.rate.ok_or_else(|| missing("--rate"))?,
            tenure_months: args.tenure_months.ok_or_else(|| missing("--tenure-months"))?,
            payout_mode: args.mode,
        }
    };

    let output = fixed_deposit::calculate_fd(&fd_input)?;
    Ok(Calculation::FixedDeposit {
        input: fd_input,
        output,
    })
}
