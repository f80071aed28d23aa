//! Inspect command: load statistics without aggregation

use colored::*;
use tracing::info;

use super::shared;
use crate::app::services::table_loader::{converters, LoadStats, TableLoader, TableSpec};
use crate::cli::args::InspectArgs;
use crate::constants::{GENDER_COLUMN, HEIGHT_COLUMN, WEIGHT_COLUMN};
use crate::Result;

/// Run the inspect command
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    info!("Inspecting table {}", args.input_path.display());

    let height_spec =
        TableSpec::new(GENDER_COLUMN, HEIGHT_COLUMN).with_skip_rows(args.skip_rows);
    let weight_spec = TableSpec::new(GENDER_COLUMN, WEIGHT_COLUMN)
        .with_skip_rows(args.skip_rows)
        .with_converter(WEIGHT_COLUMN, converters::decimal_or_missing);

    let height = TableLoader::new(height_spec).load(&args.input_path)?;
    let weight = TableLoader::new(weight_spec).load(&args.input_path)?;

    println!("{}", "Table Inspection".bright_green().bold());
    println!(
        "  {} {}",
        "File:".bright_cyan(),
        args.input_path.display()
    );
    println!(
        "  {} {} total, {} header, {} comment, {} blank",
        "Lines:".bright_cyan(),
        height.stats.lines_total.to_string().bright_white().bold(),
        height.stats.header_skipped,
        height.stats.comments_skipped,
        height.stats.blanks_skipped
    );
    print_column_stats("Height column", &height.stats);
    print_column_stats("Weight column", &weight.stats);

    Ok(())
}

fn print_column_stats(label: &str, stats: &LoadStats) {
    println!("{}", label.bright_yellow());
    println!(
        "  {} {}",
        "Records:".bright_cyan(),
        stats.records_loaded.to_string().bright_white().bold()
    );
    if stats.is_complete() {
        println!("  {} none", "Missing values:".bright_cyan());
    } else {
        println!(
            "  {} {} ({:.1}%)",
            "Missing values:".bright_cyan(),
            stats.missing_values.to_string().bright_red().bold(),
            stats.missing_rate()
        );
    }
}
