//! Command implementations for the cohort stats CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod inspect;
pub mod report;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the cohort stats tool
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `report`: load both measurement tables and print group averages
/// - `inspect`: load the tables and print load statistics only
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
