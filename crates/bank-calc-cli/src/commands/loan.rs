use clap::Args;
use rust_decimal::Decimal;

use bank_calc_core::loan::{self, LoanInput};

use super::{missing, months, positive_amount, rate_percent, Calculation};
use crate::input;

/// Arguments for the reducing-balance loan calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, value_parser = positive_amount)]
    pub principal: Option<Decimal>,

    /// Loan term in months
    #[arg(long, value_parser = months)]
    pub term_months: Option<u32>,

    /// Annual interest rate in percent
    #[arg(long, value_parser = rate_percent)]
    pub rate: Option<Decimal>,

    /// Print the month-by-month repayment schedule in the report
    #[arg(long)]
    pub schedule: bool,
}

pub fn run_loan(args: LoanArgs) -> Result<Calculation, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.principal.is_none() && args.term_months.is_none() && args.rate.is_none() {
        input::stdin::read_stdin()?
            .ok_or_else(|| missing("--principal, --term-months and --rate"))?
    } else {
        LoanInput {
            principal: args.principal.ok_or_else(|| missing("--principal"))?,
            term_months: args.term_months.ok_or_else(|| missing("--term-months"))?,
            annual_rate_percent: args.rate.ok_or_else(|| missing("--rate"))?,
        }
    };

    let output = loan::amortize(&loan_input)?;
    Ok(Calculation::Loan {
        input: loan_input,
        output,
        show_schedule: args.schedule,
    })
}
