//! gradecore CLI - run the grade core from the command line.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use gradecore::adapter::input::exam_from_text;
use gradecore::{AdapterConfig, BackendPreference, BoundaryAdapter};

/// Exit code for a statistics request whose scores are rejected.
const EXIT_INPUT_REJECTED: i32 = 2;

#[derive(Parser)]
#[command(name = "gradecore", version, about = "Score statistics and final grade evaluation")]
struct Cli {
    /// Config file path (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Native module path
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    /// Never load the native module
    #[arg(long, global = true)]
    pure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mean, minimum and maximum of a JSON array of scores
    Stats {
        /// Scores as a JSON array, e.g. '[7.5, 8.0, null]'
        scores: String,
    },

    /// Final score and pass/fail status from two exams
    Grade {
        /// First exam score (blank or invalid = missing)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        exam1: String,

        /// Second exam score (blank or invalid = missing)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        exam2: String,

        /// Pass threshold (defaults to the configured one)
        #[arg(long)]
        threshold: Option<f64>,
    },
}

fn main() {
    gradecore::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => AdapterConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AdapterConfig::default(),
    }
    .with_env_overrides();

    if let Some(library) = cli.library {
        config.library_path = Some(library);
        config.backend = BackendPreference::Native;
    }
    if cli.pure {
        config.backend = BackendPreference::Pure;
    }

    let adapter = BoundaryAdapter::from_config(&config);

    match cli.command {
        Commands::Stats { scores } => {
            // Unreadable JSON, including numbers outside the f64 range, is a
            // rejected input; well-formed JSON of the wrong shape is a usage error.
            let raw = match serde_json::from_str::<Value>(&scores) {
                Ok(Value::Array(raw)) => raw,
                Ok(_) => anyhow::bail!("scores must be a JSON array"),
                Err(err) => {
                    eprintln!("Error: scores are not valid JSON: {err}");
                    return Ok(EXIT_INPUT_REJECTED);
                }
            };
            match adapter.compute_statistics(&raw) {
                Ok(report) => {
                    println!("{}", serde_json::to_string(&report)?);
                    Ok(0)
                }
                Err(err) => {
                    eprintln!("Error: {err}");
                    Ok(EXIT_INPUT_REJECTED)
                }
            }
        }
        Commands::Grade {
            exam1,
            exam2,
            threshold,
        } => {
            let outcome = adapter.compute_final_grade_with_threshold(
                exam_from_text(&exam1),
                exam_from_text(&exam2),
                threshold.unwrap_or(adapter.threshold()),
            );
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(0)
        }
    }
}
