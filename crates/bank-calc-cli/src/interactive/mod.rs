//! The menu-driven shell: prompts for each input, re-prompting on invalid
//! answers, and prints the report for each calculation.

pub mod prompt;

use std::io::{BufRead, Write};

use colored::Colorize;

use bank_calc_core::date_interest::{self, DateRangeInput};
use bank_calc_core::fixed_deposit::{self, FdInput, PayoutMode};
use bank_calc_core::loan::{self, LoanInput};
use bank_calc_core::parse;
use bank_calc_core::recurring_deposit::{self, RecurringDepositInput};

use crate::commands::Calculation;
use crate::error::{CliError, CliResult};
use crate::output::report;
use prompt::Prompter;

const POSITIVE_HINT: &str = "Please enter a positive number.";
const NON_NEGATIVE_HINT: &str = "Please enter a non-negative number.";
const WHOLE_HINT: &str = "Please enter a positive whole number.";
const DATE_HINT: &str = "Please use DD-MM-YYYY.";

/// Run the menu until the user exits or input ends. End of input is a clean
/// exit, not an error.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CliResult<()> {
    match menu_loop(prompter) {
        Err(CliError::EndOfInput) => {
            tracing::debug!("input closed, leaving interactive session");
            writeln!(prompter.writer())?;
            Ok(())
        }
        other => other,
    }
}

fn menu_loop<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CliResult<()> {
    loop {
        let out = prompter.writer();
        writeln!(out, "\n{}", "--- Welcome to the Bank Calculator! ---".bold())?;
        writeln!(out, "A simple, user-friendly tool for your banking calculations.")?;
        writeln!(out, "\nChoose an option:")?;
        writeln!(out, "1. Loan Calculator (Summary & Optional Repayment Table)")?;
        writeln!(out, "2. Fixed Deposit (FD) Interest Calculator")?;
        writeln!(out, "3. Calculate Interest Between Dates")?;
        writeln!(out, "4. Daily Deposit Interest Calculator")?;
        writeln!(out, "5. Exit Application")?;

        let choice = prompter.ask("\nEnter your choice: ")?;
        let outcome = match choice.trim() {
            "1" => loan_session(prompter),
            "2" => fd_session(prompter),
            "3" => interest_session(prompter),
            "4" => deposit_session(prompter),
            "5" => {
                writeln!(
                    prompter.writer(),
                    "Thank you for using the Cooperative Bank Calculator. Goodbye!"
                )?;
                return Ok(());
            }
            _ => {
                writeln!(
                    prompter.writer(),
                    "Invalid choice. Please enter a number between 1 and 5."
                )?;
                continue;
            }
        };

        match outcome {
            Err(CliError::Calculation(e)) => {
                writeln!(prompter.writer(), "{}: {}", "error".red().bold(), e)?;
            }
            other => other?,
        }
    }
}

fn loan_session<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CliResult<()> {
    writeln!(prompter.writer(), "\n--- Loan Calculator (Reducing Balance Method) ---")?;

    let principal = prompter.ask_until("Enter Loan Amount: ", POSITIVE_HINT, |s| {
        parse::parse_positive_amount("principal", s)
    })?;
    let term_months = prompter.ask_until("Enter Loan Term (in months): ", WHOLE_HINT, |s| {
        parse::parse_months("term_months", s)
    })?;
    let annual_rate_percent = prompter.ask_until(
        "Enter Annual Interest Rate (%): ",
        NON_NEGATIVE_HINT,
        parse::parse_rate_percent,
    )?;

    let input = LoanInput {
        principal,
        term_months,
        annual_rate_percent,
    };
    let output = loan::amortize(&input)?;
    report::loan_summary(prompter.writer(), &input, &output.result)?;

    let show_schedule = prompter.ask_until(
        "\nDo you want to see the detailed repayment schedule table? (yes/no): ",
        "Please type 'yes' or 'no'.",
        parse::parse_yes_no,
    )?;
    if show_schedule {
        writeln!(prompter.writer(), "\n--- Detailed Loan Repayment Schedule Table ---")?;
        report::loan_schedule(prompter.writer(), &output.result)?;
    } else {
        writeln!(prompter.writer(), "Repayment schedule not displayed.")?;
    }
    Ok(())
}

fn fd_session<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CliResult<()> {
    writeln!(prompter.writer(), "\n--- Fixed Deposit (FD) Interest Calculator ---")?;

    let principal = prompter.ask_until("Enter FD Principal Amount: ", POSITIVE_HINT, |s| {
        parse::parse_positive_amount("principal", s)
    })?;
    let annual_rate_percent = prompter.ask_until(
        "Enter Annual Interest Rate (%): ",
        NON_NEGATIVE_HINT,
        parse::parse_rate_percent,
    )?;
    let tenure_months = prompter.ask_until("Enter FD Tenure (in months): ", WHOLE_HINT, |s| {
        parse::parse_months("tenure_months", s)
    })?;

    let payout_mode = loop {
        let out = prompter.writer();
        writeln!(out, "\nSelect FD Type:")?;
        writeln!(out, "1. {}", PayoutMode::AtMaturity)?;
        writeln!(out, "2. {}", PayoutMode::MonthlyPayout)?;
        let choice = prompter.ask("Enter choice (1/2): ")?;
        match PayoutMode::from_choice(&choice) {
            Ok(mode) => break mode,
            Err(_) => writeln!(prompter.writer(), "Invalid choice. Please select 1 or 2.")?,
        }
    };

    let input = FdInput {
        principal,
        annual_rate_percent,
        tenure_months,
        payout_mode,
    };
    let output = fixed_deposit::calculate_fd(&input)?;
    report::render(prompter.writer(), &Calculation::FixedDeposit { input, output })
}

fn interest_session<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CliResult<()> {
    writeln!(prompter.writer(), "\n--- Interest Between Dates Calculator ---")?;

    let start_date =
        prompter.ask_until("Enter the first date (DD-MM-YYYY): ", DATE_HINT, parse::parse_date)?;
    let end_date = prompter.ask_until(
        "Enter the second date (DD-MM-YYYY): ",
        "Please use DD-MM-YYYY and ensure the end date is not before the start date.",
        |s| parse::parse_end_date(start_date, s),
    )?;
    let balance = prompter.ask_until("Enter the balance: ", NON_NEGATIVE_HINT, |s| {
        parse::parse_non_negative_amount("balance", s)
    })?;
    let annual_rate_percent = prompter.ask_until(
        "Enter the annual interest rate (%): ",
        NON_NEGATIVE_HINT,
        parse::parse_rate_percent,
    )?;

    let input = DateRangeInput {
        start_date,
        end_date,
        balance,
        annual_rate_percent,
    };
    let output = date_interest::interest_between_dates(&input)?;
    report::render(prompter.writer(), &Calculation::Interest { input, output })
}

fn deposit_session<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CliResult<()> {
    writeln!(prompter.writer(), "\n--- Daily Deposit Interest Calculator ---")?;

    let start_date =
        prompter.ask_until("Enter Start Date (DD-MM-YYYY): ", DATE_HINT, parse::parse_date)?;
    let deposit_amount = prompter.ask_until("Enter Collection Amount: ", POSITIVE_HINT, |s| {
        parse::parse_positive_amount("deposit_amount", s)
    })?;
    let frequency = prompter.ask_until(
        "Enter Deposit Frequency (Daily/Weekly/Monthly): ",
        "Please choose 'Daily', 'Weekly', or 'Monthly'.",
        |s| s.parse(),
    )?;
    let annual_rate_percent = prompter.ask_until(
        "Enter Annual Interest Rate (%): ",
        NON_NEGATIVE_HINT,
        parse::parse_rate_percent,
    )?;
    let period_months = prompter.ask_until("Enter Period (in months): ", WHOLE_HINT, |s| {
        parse::parse_months("period_months", s)
    })?;

    let input = RecurringDepositInput {
        start_date,
        deposit_amount,
        frequency,
        annual_rate_percent,
        period_months,
    };
    let output = recurring_deposit::recurring_accrual(&input)?;
    report::render(prompter.writer(), &Calculation::Deposit { input, output })
}
