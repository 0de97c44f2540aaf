//! The `hardvote` command line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use hardvote::{Evaluation, Evaluator};


/// Evaluate a hard-voting ensemble of linear classifiers
/// against a validation set.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding `dataset.csv` and `labels.csv`
    validation_dir: PathBuf,

    /// Directory holding one `*.csv` weight file per classifier
    weight_vector_dir: PathBuf,

    /// Print the per-classifier accuracy table to stderr
    #[arg(long)]
    verbose: bool,

    /// Emit the full report as JSON instead of the plain accuracy line
    #[arg(long)]
    json: bool,
}


fn main() -> ExitCode {
    let cli = Cli::parse();

    let evaluator = Evaluator::new(&cli.validation_dir, &cli.weight_vector_dir);
    let report = match evaluator.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {e}", "error:".bold().red());
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        print_member_table(&report);
    }

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{} {e}", "error:".bold().red());
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Accuracy: {:.2}%", 100.0 * report.ensemble_accuracy);
    }
    ExitCode::SUCCESS
}


/// Per-classifier diagnostics, kept off stdout so the accuracy
/// contract stays a single line.
fn print_member_table(report: &Evaluation) {
    eprintln!(
        "{:<24}\t{:>8}",
        "CLASSIFIER".bold().green(),
        "ACC.".bold().yellow(),
    );
    for member in &report.members {
        eprintln!(
            "{:<24}\t{:>7.2}%",
            member.name,
            100.0 * member.accuracy,
        );
    }
    eprintln!(
        "{:<24}\t{:>7.2}%",
        format!("ensemble of {}", report.members.len()).bold(),
        100.0 * report.ensemble_accuracy,
    );
}
