//! Parsing of raw user input into validated grades.

use serde::Serialize;
use std::fmt;

use crate::error::GradeError;

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 10.0;

/// A value as the caller collected it: already numeric, or still text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Blank text counts as "not supplied". Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Number(_) => false,
            RawValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => f.write_str(s.trim()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// A grade in `[0, 10]`. Only obtainable through [`parse_grade`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Grade(f64);

impl Grade {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        parse_grade(&RawValue::Number(value))
    }
}

/// Reads a raw value as a number without any range check.
///
/// Text is trimmed and must parse as a whole; blank text and NaN are
/// rejected with [`GradeError::InvalidGrade`].
pub fn parse_number(raw: &RawValue) -> Result<f64, GradeError> {
    let value = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeError::InvalidGrade)?,
    };

    if value.is_nan() {
        return Err(GradeError::InvalidGrade);
    }

    Ok(value)
}

/// Validates a raw value as a [`Grade`].
///
/// # Errors
///
/// - [`GradeError::InvalidGrade`] if the value is not a number
/// - [`GradeError::NegativeGrade`] if it is below 0
/// - [`GradeError::GradeTooHigh`] if it is above 10
pub fn parse_grade(raw: &RawValue) -> Result<Grade, GradeError> {
    let value = parse_number(raw)?;

    if value < MIN_GRADE {
        return Err(GradeError::NegativeGrade);
    }

    if value > MAX_GRADE {
        return Err(GradeError::GradeTooHigh);
    }

    Ok(Grade(value))
}

/// Parses the target average for the required-score solver.
pub fn parse_target(raw: &RawValue) -> Result<f64, GradeError> {
    parse_number(raw).map_err(|_| GradeError::InvalidTarget)
}
