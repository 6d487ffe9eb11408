use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use bank_calc_core::date_interest::{self, DateRangeInput};
use bank_calc_core::parse;

use super::{missing, non_negative_amount, rate_percent, Calculation};
use crate::input;

/// Arguments for simple interest between two dates
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InterestArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// First date (DD-MM-YYYY)
    #[arg(long, value_parser = parse::parse_date)]
    pub from: Option<NaiveDate>,

    /// Second date (DD-MM-YYYY), on or after --from
    #[arg(long, value_parser = parse::parse_date)]
    pub to: Option<NaiveDate>,

    /// Account balance
    #[arg(long, value_parser = non_negative_amount)]
    pub balance: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, value_parser = rate_percent)]
    pub rate: Option<Decimal>,
}

pub fn run_interest(args: InterestArgs) -> Result<Calculation, Box<dyn std::error::Error>> {
    let range_input: DateRangeInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.from.is_none()
        && args.to.is_none()
        && args.balance.is_none()
        && args.rate.is_none()
    {
        input::stdin::read_stdin()?
            .ok_or_else(|| missing("--from, --to, --balance and --rate"))?
    } else {
        let start_date = args.from.ok_or_else(|| missing("--from"))?;
        let end_date = args.to.ok_or_else(|| missing("--to"))?;
        parse::ensure_date_order(start_date, end_date)?;
        DateRangeInput {
            start_date,
            end_date,
            balance: args.balance.ok_or_else(|| missing("--balance"))?,
            annual_rate_percent: args.rate.ok_or_else(|| missing("--rate"))?,
        }
    };

    let output = date_interest::interest_between_dates(&range_input)?;
    Ok(Calculation::Interest {
        input: range_input,
        output,
    })
}
