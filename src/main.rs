//! CLI entry point for the grade calculator.
//!
//! Provides subcommands for computing a student's final average and for
//! finding the minimum score still needed to reach a target average.

use anyhow::{Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use grade_calc::grading::{Component, GradeInputs, KnownScores, Weights, required_score_for_target};
use grade_calc::output::{
    append_record, export_report, render_required, render_summary, to_json, write_report,
};
use grade_calc::parser::{RawValue, parse_target};
use grade_calc::record::GradeRecord;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_calc")]
#[command(about = "Weighted average and required-score calculator (P1 35%, P2 35%, Trabalho 30%)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the initial and final averages, status and letter grade
    Calculate {
        /// First exam score
        #[arg(long, allow_hyphen_values = true)]
        p1: String,

        /// Second exam score
        #[arg(long, allow_hyphen_values = true)]
        p2: String,

        /// Assignment score
        #[arg(long, allow_hyphen_values = true)]
        trabalho: String,

        /// Optional makeup exam score, used only when the average is below 6
        #[arg(long, allow_hyphen_values = true)]
        p3: Option<String>,

        /// Write the plain-text report to this file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Write the report as result-<millis>.txt into this directory; with no
        /// value, uses GRADE_CALC_EXPORT_DIR or "."
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        export_dir: Option<Option<PathBuf>>,

        /// CSV file to append the calculation to
        #[arg(long)]
        history: Option<String>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Find the minimum score needed in the unknown components
    Required {
        /// Known first exam score (omit if unknown)
        #[arg(long, allow_hyphen_values = true)]
        p1: Option<String>,

        /// Known second exam score (omit if unknown)
        #[arg(long, allow_hyphen_values = true)]
        p2: Option<String>,

        /// Known assignment score (omit if unknown)
        #[arg(long, allow_hyphen_values = true)]
        trabalho: Option<String>,

        /// Weight of P1
        #[arg(long, default_value = "0.35")]
        w_p1: String,

        /// Weight of P2
        #[arg(long, default_value = "0.35")]
        w_p2: String,

        /// Weight of Trabalho
        #[arg(long, default_value = "0.30")]
        w_trabalho: String,

        /// Target average
        #[arg(short, long, default_value = "6")]
        target: String,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_calc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            p1,
            p2,
            trabalho,
            p3,
            export,
            export_dir,
            history,
            json,
        } => {
            let mut inputs = GradeInputs::new(p1, p2, trabalho);
            if let Some(p3) = p3 {
                inputs = inputs.with_makeup(p3);
            }
            calculate(&inputs, export, export_dir, history, json)?;
        }
        Commands::Required {
            p1,
            p2,
            trabalho,
            w_p1,
            w_p2,
            w_trabalho,
            target,
            json,
        } => {
            let weights = Weights::parse(&w_p1, &w_p2, &w_trabalho)?.ensure_normalized()?;
            let target = parse_target(&RawValue::from(target))?;

            let mut known = KnownScores::new();
            for (component, value) in [
                (Component::FirstExam, p1),
                (Component::SecondExam, p2),
                (Component::Assignment, trabalho),
            ] {
                if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                    known.insert(component, Some(RawValue::from(value)));
                }
            }

            let result = required_score_for_target(&known, &weights, target);
            if json {
                println!("{}", to_json(&result)?);
            } else {
                println!("{}", render_required(&result));
            }

            if result.feasible {
                info!("Calculation complete");
            } else {
                warn!("Target cannot be reached");
            }
        }
    }

    Ok(())
}

/// Runs the forward calculation, prints it, and handles export and history.
///
/// A failed calculation is recorded in the history file, then returned as the
/// command's error without printing a summary.
#[tracing::instrument(skip_all, fields(json = json, history = ?history))]
fn calculate(
    inputs: &GradeInputs,
    export: Option<PathBuf>,
    export_dir: Option<Option<PathBuf>>,
    history: Option<String>,
    json: bool,
) -> Result<()> {
    inputs.ensure_filled()?;

    let result = inputs.calculate();

    if let Some(path) = &history {
        append_record(path, &GradeRecord::from_result(inputs, &result))?;
    }

    if let Some(error) = &result.error {
        bail!("{error}");
    }

    if json {
        println!("{}", to_json(&result)?);
    } else {
        println!("{}", render_summary(&result));
    }

    let generated_at = Utc::now();
    if let Some(path) = &export {
        write_report(path, inputs, &result, generated_at)?;
    }
    if let Some(dir) = export_dir {
        let dir = dir.unwrap_or_else(|| {
            PathBuf::from(
                std::env::var("GRADE_CALC_EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
            )
        });
        let path = export_report(&dir, inputs, &result, generated_at)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
