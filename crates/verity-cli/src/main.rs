//! Verity CLI - classify local image files without running the server.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use verity_cli::{
    classify_path, format_outcome, format_rules, init_tracing, rules_summary, FileOutcome,
};
use verity_core::Classifier;

#[derive(Parser)]
#[command(name = "verity", about = "Heuristic image authenticity checks", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more image files
    Classify {
        /// Image files to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the rule chain and its weights
    Rules {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let classifier = Classifier::default();

    match cli.command {
        Commands::Classify { files, json } => {
            let outcomes: Vec<FileOutcome> = files
                .iter()
                .map(|path| classify_path(&classifier, path))
                .collect();

            if json {
                print_json(&outcomes)?;
            } else {
                for outcome in &outcomes {
                    println!("{}", format_outcome(outcome));
                }
            }

            let failed = outcomes.iter().filter(|o| o.is_failure()).count();
            if failed > 0 {
                anyhow::bail!("{} of {} files could not be read", failed, outcomes.len());
            }
        }
        Commands::Rules { json } => {
            let summary = rules_summary(&classifier);
            if json {
                print_json(&summary)?;
            } else {
                println!("{}", format_rules(&summary));
            }
        }
    }

    Ok(())
}
