use clap::Parser;
use cohort_stats::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - output has already been produced by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Cohort Stats - Student Measurement Table Summariser");
    println!("===================================================");
    println!();
    println!("Load a whitespace-delimited student measurement table, tolerating");
    println!("missing-value markers, and report male/female group averages.");
    println!();
    println!("USAGE:");
    println!("    cohort-stats <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Report male/female average height and weight (main command)");
    println!("    inspect     Inspect a table and report its load statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Report group averages for the standard layout (9 header lines):");
    println!("    cohort-stats report data/eg6-a-student-data.txt");
    println!();
    println!("    # Report for a table with a different header offset:");
    println!("    cohort-stats report measurements.txt --skip-rows 2");
    println!();
    println!("    # Inspect line and missing-value counts without aggregating:");
    println!("    cohort-stats inspect data/eg6-a-student-data.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cohort-stats <COMMAND> --help");
}
