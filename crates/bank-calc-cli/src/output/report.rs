//! Human-readable console layout: labelled summary lines and fixed-width
//! schedule tables with every amount in rupees.

use std::io::Write;

use bank_calc_core::currency::format_inr;
use bank_calc_core::date_interest::{DateRangeInput, DateRangeOutput};
use bank_calc_core::fixed_deposit::{FdInput, FdOutcome};
use bank_calc_core::loan::{AmortizationOutput, LoanInput};
use bank_calc_core::parse::format_date;
use bank_calc_core::recurring_deposit::{RecurringDepositInput, RecurringDepositOutput};
use bank_calc_core::RatePercent;

use crate::commands::Calculation;
use crate::error::CliResult;

const SECTION_RULE: &str = "------------------------------";
const FOOTER_RULE: &str = "---------------------------------";
const LOAN_TABLE_WIDTH: usize = 79;
const DEPOSIT_TABLE_WIDTH: usize = 70;

pub fn render<W: Write>(out: &mut W, calculation: &Calculation) -> CliResult<()> {
    let warnings = match calculation {
        Calculation::Loan {
            input,
            output,
            show_schedule,
        } => {
            loan_summary(out, input, &output.result)?;
            if *show_schedule {
                loan_schedule(out, &output.result)?;
            }
            &output.warnings
        }
        Calculation::FixedDeposit { input, output } => {
            fixed_deposit(out, input, &output.result)?;
            &output.warnings
        }
        Calculation::Interest { input, output } => {
            interest_between_dates(out, input, &output.result)?;
            &output.warnings
        }
        Calculation::Deposit { input, output } => {
            recurring_deposit(out, input, &output.result)?;
            &output.warnings
        }
    };

    for warning in warnings {
        writeln!(out, "Note: {warning}")?;
    }
    Ok(())
}

pub fn loan_summary<W: Write>(
    out: &mut W,
    input: &LoanInput,
    result: &AmortizationOutput,
) -> CliResult<()> {
    writeln!(out, "{SECTION_RULE}")?;
    writeln!(out, "\nSummary for Loan:")?;
    writeln!(out, "Loan Amount: {}", format_inr(input.principal)?)?;
    writeln!(out, "Loan Term: {} months", input.term_months)?;
    writeln!(out, "Annual Interest Rate: {}%", percent(input.annual_rate_percent))?;
    writeln!(
        out,
        "Fixed Principal per month: {}",
        format_inr(result.fixed_installment)?
    )?;
    writeln!(
        out,
        "Total Interest Paid: {}",
        format_inr(result.summary.total_interest)?
    )?;
    writeln!(
        out,
        "Total Amount Paid (Principal + Interest): {}",
        format_inr(result.summary.total_payment)?
    )?;
    writeln!(out, "{SECTION_RULE}")?;
    Ok(())
}

pub fn loan_schedule<W: Write>(out: &mut W, result: &AmortizationOutput) -> CliResult<()> {
    writeln!(out, "\n--- Monthly Repayment Details ---")?;
    writeln!(
        out,
        "{:<7}{:>18}{:>18}{:>18}{:>18}",
        "Month", "Principal", "Interest", "Total EMI", "Balance"
    )?;
    writeln!(out, "{}", "-".repeat(LOAN_TABLE_WIDTH))?;

    for row in &result.schedule {
        writeln!(
            out,
            "{:<7}{:>18}{:>18}{:>18}{:>18}",
            row.period,
            format_inr(row.principal_portion)?,
            format_inr(row.interest_portion)?,
            format_inr(row.total_payment)?,
            format_inr(row.remaining_balance)?
        )?;
    }

    writeln!(out, "{}", "-".repeat(LOAN_TABLE_WIDTH))?;
    writeln!(
        out,
        "{:<7}{:>18}{:>18}{:>18}{:>18}",
        "Total",
        format_inr(result.summary.total_principal)?,
        format_inr(result.summary.total_interest)?,
        format_inr(result.summary.total_payment)?,
        ""
    )?;
    writeln!(out, "{FOOTER_RULE}\n")?;
    Ok(())
}

pub fn fixed_deposit<W: Write>(out: &mut W, input: &FdInput, result: &FdOutcome) -> CliResult<()> {
    writeln!(out, "\nFD Type: {}", input.payout_mode)?;
    match result {
        FdOutcome::AtMaturity {
            interest_earned,
            maturity_amount,
        } => {
            writeln!(
                out,
                "Total Interest Earned (at maturity): {}",
                format_inr(*interest_earned)?
            )?;
            writeln!(out, "Maturity Amount: {}", format_inr(*maturity_amount)?)?;
        }
        FdOutcome::MonthlyPayout {
            monthly_interest,
            total_interest_earned,
            maturity_amount,
        } => {
            writeln!(out, "Principal Amount: {}", format_inr(input.principal)?)?;
            writeln!(
                out,
                "Interest Transferred Monthly: {}",
                format_inr(*monthly_interest)?
            )?;
            writeln!(
                out,
                "Total Interest Earned Over {} months: {}",
                input.tenure_months,
                format_inr(*total_interest_earned)?
            )?;
            writeln!(
                out,
                "Amount Received at Maturity (Principal): {}",
                format_inr(*maturity_amount)?
            )?;
        }
    }

    writeln!(out, "\nFD Principal Amount: {}", format_inr(input.principal)?)?;
    writeln!(out, "Annual Interest Rate: {}%", percent(input.annual_rate_percent))?;
    writeln!(out, "Tenure: {} months", input.tenure_months)?;
    writeln!(out, "{SECTION_RULE}")?;
    Ok(())
}

pub fn interest_between_dates<W: Write>(
    out: &mut W,
    input: &DateRangeInput,
    result: &DateRangeOutput,
) -> CliResult<()> {
    let start = format_date(input.start_date);
    let end = format_date(input.end_date);

    writeln!(
        out,
        "\nNumber of days between {start} and {end}: {}",
        result.elapsed_days
    )?;
    writeln!(out, "Interest per day: {}", format_inr(result.interest_per_day)?)?;
    if let Some(monthly) = result.approximate_monthly_interest {
        writeln!(out, "Approximate interest per month: {}", format_inr(monthly)?)?;
    }
    writeln!(
        out,
        "Interest between {start} and {end}: {}",
        format_inr(result.total_interest)?
    )?;
    writeln!(out, "{SECTION_RULE}")?;
    Ok(())
}

pub fn recurring_deposit<W: Write>(
    out: &mut W,
    input: &RecurringDepositInput,
    result: &RecurringDepositOutput,
) -> CliResult<()> {
    let summary = &result.summary;

    writeln!(out, "\n--- Daily Deposit Details ---")?;
    writeln!(
        out,
        "{:<12}{:>18}{:>18}{:>20}",
        "Date", "Amount", "Days Held", "Interest Accrued"
    )?;
    writeln!(out, "{}", "-".repeat(DEPOSIT_TABLE_WIDTH))?;

    for entry in &result.schedule {
        writeln!(
            out,
            "{:<12}{:>18}{:>18}{:>20}",
            format_date(entry.deposit_date),
            format_inr(input.deposit_amount)?,
            entry.days_held,
            format_inr(entry.interest_accrued)?
        )?;
    }

    writeln!(out, "{}", "-".repeat(DEPOSIT_TABLE_WIDTH))?;
    writeln!(
        out,
        "{:<12}{:>18}{:>18}{:>20}",
        "Total",
        format_inr(summary.total_principal_deposited)?,
        "",
        format_inr(summary.total_interest_accrued)?
    )?;
    writeln!(out, "{FOOTER_RULE}\n")?;

    writeln!(out, "\n--- Daily Deposit Calculation Summary ---")?;
    writeln!(out, "Start Date:              {}", format_date(input.start_date))?;
    writeln!(out, "Approx. End Date:        {}", format_date(summary.end_date))?;
    writeln!(out, "Period:                  {} months", input.period_months)?;
    writeln!(
        out,
        "Collection Amount per deposit: {}",
        format_inr(input.deposit_amount)?
    )?;
    writeln!(out, "Annual Interest Rate:    {:.2}%", input.annual_rate_percent)?;
    writeln!(out, "Deposit Frequency:       {}", input.frequency)?;
    writeln!(
        out,
        "Total Principal Deposited: {}",
        format_inr(summary.total_principal_deposited)?
    )?;
    writeln!(
        out,
        "Total Interest Earned:   {}",
        format_inr(summary.total_interest_accrued)?
    )?;
    writeln!(
        out,
        "Maturity Value (Total Principal + Total Interest): {}",
        format_inr(summary.maturity_value)?
    )?;
    writeln!(out, "--- End of Calculation ---")?;
    Ok(())
}

/// `12.50` -> `12.5`, `12` -> `12`.
fn percent(rate: RatePercent) -> String {
    rate.normalize().to_string()
}
