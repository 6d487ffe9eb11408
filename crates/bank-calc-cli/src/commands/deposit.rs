use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use bank_calc_core::parse;
use bank_calc_core::recurring_deposit::{self, DepositFrequency, RecurringDepositInput};

use super::{missing, months, positive_amount, rate_percent, Calculation};
use crate::input;

/// Arguments for the daily deposit (recurring collection) calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DepositArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// First collection date (DD-MM-YYYY)
    #[arg(long, value_parser = parse::parse_date)]
    pub start: Option<NaiveDate>,

    /// Amount collected on every deposit date
    #[arg(long, value_parser = positive_amount)]
    pub amount: Option<Decimal>,

    /// Collection frequency: daily, weekly or monthly
    #[arg(long, default_value = "daily")]
    pub frequency: DepositFrequency,

    /// Annual interest rate in percent
    #[arg(long, value_parser = rate_percent)]
    pub rate: Option<Decimal>,

    /// Period in months
    #[arg(long, value_parser = months)]
    pub months: Option<u32>,
}

pub fn run_deposit(args: DepositArgs) -> Result<Calculation, Box<dyn std::error::Error>> {
    let deposit_input: RecurringDepositInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.start.is_none()
        && args.amount.is_none()
        && args.rate.is_none()
        && args.months.is_none()
    {
        input::stdin::read_stdin()?
            .ok_or_else(|| missing("--start, --amount, --rate and --months"))?
    } else {
        RecurringDepositInput {
            start_date: args.start.ok_or_else(|| missing("--start"))?,
            deposit_amount: args.amount.ok_or_else(|| missing("--amount"))?,
            frequency: args.frequency,
            annual_rate_percent: args.rate.ok_or_else(|| missing("--rate"))?,
            period_months: args.months.ok_or_else(|| missing("--months"))?,
        }
    };

    let output = recurring_deposit::recurring_accrual(&deposit_input)?;
    Ok(Calculation::Deposit {
        input: deposit_input,
        output,
    })
}
