use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aucalc_cli::commands::{batch, loan, tax};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Australian personal income tax and home loan estimator.
///
/// Assesses a single year's income tax position, estimates home loan
/// repayments, or processes a whole CSV of assessments in batch.
#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Assess one year's income tax position.
    Tax(tax::TaxArgs),

    /// Estimate home loan repayments and lifetime cost.
    Loan(loan::LoanArgs),

    /// Assess a CSV of inputs and write a results CSV.
    Batch(batch::BatchArgs),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * `RUST_LOG` takes precedence when set.
/// * Defaults to `info` otherwise.
/// * Timestamps and target names are stripped so reports stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Tax(args) => tax::run(args),
        Commands::Loan(args) => loan::run(args),
        Commands::Batch(args) => batch::run(args),
    }
}
