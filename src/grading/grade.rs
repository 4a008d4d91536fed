use crate::grading::types::{Letter, Status};

/// Minimum final average for a passing status.
pub const PASS_THRESHOLD: f64 = 6.0;

/// [`Status::Pass`] at or above [`PASS_THRESHOLD`], otherwise
/// [`Status::Remediation`].
pub fn pass_fail(average: f64) -> Status {
    if average >= PASS_THRESHOLD {
        Status::Pass
    } else {
        Status::Remediation
    }
}

/// Converts a final average (0–10) into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 9.0  | A     |
/// | >= 7.0  | B     |
/// | >= 6.0  | C     |
/// | >= 4.0  | D     |
/// | < 4.0   | F     |
pub fn letter_grade(average: f64) -> Letter {
    match average {
        a if a >= 9.0 => Letter::A,
        a if a >= 7.0 => Letter::B,
        a if a >= 6.0 => Letter::C,
        a if a >= 4.0 => Letter::D,
        _ => Letter::F,
    }
}
