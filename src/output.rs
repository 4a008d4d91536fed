//! Output formatting and persistence for calculation results.
//!
//! Supports console summaries, JSON serialization, the plain-text report
//! export, and CSV history append.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::grading::calculator::GradeInputs;
use crate::grading::types::{GradeResult, RequiredScoreResult};
use crate::record::GradeRecord;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

const REPORT_TITLE: &str = "Grade Calculator";

/// Serializes any result type as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Short console rendering of a forward result.
pub fn render_summary(result: &GradeResult) -> String {
    match &result.error {
        Some(message) => format!("Error: {message}"),
        None => format!(
            "Initial average: {:.2}\nFinal average:   {:.2}\nStatus:          {}\nLetter grade:    {}",
            result.initial_average, result.final_average, result.status, result.letter
        ),
    }
}

/// Short console rendering of a solver result.
pub fn render_required(result: &RequiredScoreResult) -> String {
    let tag = if result.feasible {
        "Achievable"
    } else {
        "Not achievable"
    };
    format!("[{tag}] {}", result.message)
}

/// Builds the plain-text report for a successful calculation.
///
/// The P3 line only appears when a makeup score was supplied.
pub fn render_report(
    inputs: &GradeInputs,
    result: &GradeResult,
    generated_at: DateTime<Utc>,
) -> String {
    let makeup_line = inputs
        .supplied_makeup()
        .map(|p3| format!("  P3 (Makeup): {p3}\n"))
        .unwrap_or_default();

    format!(
        "{REPORT_TITLE}\n\
         {separator}\n\
         \n\
         Grades:\n\
         \x20 P1: {p1}\n\
         \x20 P2: {p2}\n\
         \x20 Trabalho: {trabalho}\n\
         {makeup_line}\
         \n\
         Results:\n\
         \x20 Initial Average: {initial:.2}\n\
         \x20 Final Average: {final_avg:.2}\n\
         \x20 Status: {status}\n\
         \x20 Letter Grade: {letter}\n\
         \n\
         Generated at: {generated}\n",
        separator = "=".repeat(38),
        p1 = inputs.first_exam,
        p2 = inputs.second_exam,
        trabalho = inputs.assignment,
        initial = result.initial_average,
        final_avg = result.final_average,
        status = result.status,
        letter = result.letter,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Writes the plain-text report to `path`.
///
/// # Errors
///
/// Refuses to export a failed calculation, and propagates I/O errors.
pub fn write_report(
    path: &Path,
    inputs: &GradeInputs,
    result: &GradeResult,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    if !result.is_ok() {
        bail!("No result to export");
    }

    std::fs::write(path, render_report(inputs, result, generated_at))?;
    info!(path = %path.display(), "Report exported");
    Ok(())
}

/// Writes the report into `dir` as `result-<unix millis>.txt` and returns
/// the path written.
pub fn export_report(
    dir: &Path,
    inputs: &GradeInputs,
    result: &GradeResult,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(generated_at));
    write_report(&path, inputs, result, generated_at)?;
    Ok(path)
}

pub fn report_file_name(generated_at: DateTime<Utc>) -> String {
    format!("result-{}.txt", generated_at.timestamp_millis())
}

/// Appends a [`GradeRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &GradeRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
