//! Command-line argument definitions for cohort stats
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_HEADER_ROWS;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the cohort stats tool
///
/// Summarises whitespace-delimited student measurement tables, tolerating
/// missing-value markers, and reports male/female group averages.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cohort-stats",
    version,
    about = "Summarise student measurement tables with group averages",
    long_about = "Loads a whitespace-delimited student measurement table (gender, height, \
                  weight), skipping header and comment lines and tolerating missing-value \
                  markers, then reports male and female average height and weight."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the cohort stats tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Report male/female average height and weight (main command)
    Report(ReportArgs),
    /// Inspect a table and report its load statistics
    Inspect(InspectArgs),
}

/// Arguments for the report command (main summary)
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Path to the measurement table
    ///
    /// A positional text file: tokens separated by runs of whitespace, a
    /// fixed number of header lines, and `#`-prefixed comment lines.
    #[arg(value_name = "FILE", help = "Path to the measurement table")]
    pub input_path: PathBuf,

    /// Number of header lines to skip before the data region
    ///
    /// Blank and comment lines within the offset count toward it; comment
    /// lines after the offset are skipped explicitly.
    #[arg(
        long = "skip-rows",
        value_name = "COUNT",
        default_value_t = DEFAULT_HEADER_ROWS,
        help = "Number of header lines to skip before the data region"
    )]
    pub skip_rows: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (load statistics report)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Path to the measurement table
    #[arg(value_name = "FILE", help = "Path to the measurement table")]
    pub input_path: PathBuf,

    /// Number of header lines to skip before the data region
    #[arg(
        long = "skip-rows",
        value_name = "COUNT",
        default_value_t = DEFAULT_HEADER_ROWS,
        help = "Number of header lines to skip before the data region"
    )]
    pub skip_rows: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Check that an input path names an existing file
fn validate_input_path(input_path: &PathBuf) -> Result<()> {
    if !input_path.exists() {
        return Err(Error::configuration(format!(
            "Input path does not exist: {}",
            input_path.display()
        )));
    }

    if !input_path.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input_path.display()
        )));
    }

    Ok(())
}
