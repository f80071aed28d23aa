//! Report command: group averages over a measurement table

use colored::*;
use tracing::info;

use super::shared;
use crate::app::services::aggregation::{summarize_file, SummaryResult};
use crate::cli::args::ReportArgs;
use crate::constants::{HEIGHT_UNIT, WEIGHT_UNIT};
use crate::Result;

/// Run the report command
pub fn run_report(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    info!("Generating cohort report for {}", args.input_path.display());

    let result = summarize_file(&args.input_path, args.skip_rows)?;

    if !args.quiet {
        print_summary(&result);
    }

    Ok(())
}

/// Print the human-readable summary block
fn print_summary(result: &SummaryResult) {
    let summary = &result.summary;

    println!("{}", "Cohort Summary".bright_green().bold());
    println!(
        "  {} {} records, {} comment lines skipped, {} weight values missing",
        "Loaded:".bright_cyan(),
        result.height_stats.records_loaded.to_string().bright_white().bold(),
        result.height_stats.comments_skipped,
        result.weight_stats.missing_values
    );
    println!(
        "  {} male {} {unit}, female {} {unit}",
        "Average height:".bright_cyan(),
        format!("{:.2}", summary.male_height_avg).bright_white().bold(),
        format!("{:.2}", summary.female_height_avg).bright_white().bold(),
        unit = HEIGHT_UNIT
    );
    println!(
        "  {} male {} {unit}, female {} {unit}",
        "Average weight:".bright_cyan(),
        format!("{:.2}", summary.male_weight_avg).bright_white().bold(),
        format!("{:.2}", summary.female_weight_avg).bright_white().bold(),
        unit = WEIGHT_UNIT
    );
}
