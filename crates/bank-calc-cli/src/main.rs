mod commands;
mod error;
mod input;
mod interactive;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::deposit::DepositArgs;
use commands::fixed_deposit::FdArgs;
use commands::interest::InterestArgs;
use commands::loan::LoanArgs;
use interactive::prompt::Prompter;

/// Loan, fixed deposit and recurring deposit calculations in rupees
#[derive(Parser)]
#[command(
    name = "bankcalc",
    version,
    about = "Bank calculator for loans, fixed deposits and recurring deposits",
    long_about = "A calculator for reducing-balance loans, fixed-deposit interest, \
                  interest between two dates and recurring (daily deposit) collections. \
                  Run without a subcommand for the interactive menu. Dates are DD-MM-YYYY."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for subcommands
    #[arg(long, default_value = "report", global = true)]
    output: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reducing-balance loan with equal principal installments
    Loan(LoanArgs),
    /// Fixed deposit interest, paid at maturity or monthly
    Fd(FdArgs),
    /// Simple interest on a balance between two dates (actual/365)
    Interest(InterestArgs),
    /// Interest accrued on recurring daily, weekly or monthly collections
    Deposit(DepositArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Report,
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "bank_calc_core=debug,bankcalc=debug"
    } else {
        "bank_calc_core=warn,bankcalc=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        if let Err(e) = interactive::run(&mut prompter) {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
        return;
    };

    let result: Result<commands::Calculation, Box<dyn std::error::Error>> = match command {
        Commands::Loan(args) => commands::loan::run_loan(args),
        Commands::Fd(args) => commands::fixed_deposit::run_fd(args),
        Commands::Interest(args) => commands::interest::run_interest(args),
        Commands::Deposit(args) => commands::deposit::run_deposit(args),
        Commands::Version => {
            println!("bankcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    let outcome = result.and_then(|calculation| {
        tracing::debug!(format = ?cli.output, "rendering calculation");
        output::format_output(&cli.output, &calculation)
    });

    match outcome {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
