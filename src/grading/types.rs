//! Data types shared by the averaging, classification and solver stages.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::GradeError;
use crate::parser::{RawValue, parse_number};

/// Maximum distance from 1.0 tolerated when checking a caller's weights.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// A weighted component of the final average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Component {
    /// First exam (P1).
    FirstExam,
    /// Second exam (P2).
    SecondExam,
    /// Assignment (Trabalho).
    Assignment,
}

impl Component {
    pub const ALL: [Component; 3] = [
        Component::FirstExam,
        Component::SecondExam,
        Component::Assignment,
    ];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::FirstExam => "P1",
            Component::SecondExam => "P2",
            Component::Assignment => "Trabalho",
        })
    }
}

/// Scores the caller already knows, keyed by component.
///
/// Missing keys, `None` and blank text all mean "unknown".
pub type KnownScores = HashMap<Component, Option<RawValue>>;

/// Weight of each component in the final average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub first_exam: f64,
    pub second_exam: f64,
    pub assignment: f64,
}

impl Weights {
    /// 35% per exam, 30% for the assignment.
    pub const STANDARD: Weights = Weights {
        first_exam: 0.35,
        second_exam: 0.35,
        assignment: 0.30,
    };

    pub fn new(first_exam: f64, second_exam: f64, assignment: f64) -> Self {
        Weights {
            first_exam,
            second_exam,
            assignment,
        }
    }

    /// Parses caller-entered weight text, one value per component.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::InvalidWeight`] naming the first component whose
    /// weight is not a number.
    pub fn parse(first_exam: &str, second_exam: &str, assignment: &str) -> Result<Self, GradeError> {
        let read = |component: Component, raw: &str| {
            parse_number(&RawValue::from(raw)).map_err(|_| GradeError::InvalidWeight { component })
        };

        Ok(Weights {
            first_exam: read(Component::FirstExam, first_exam)?,
            second_exam: read(Component::SecondExam, second_exam)?,
            assignment: read(Component::Assignment, assignment)?,
        })
    }

    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::FirstExam => self.first_exam,
            Component::SecondExam => self.second_exam,
            Component::Assignment => self.assignment,
        }
    }

    /// Iterates `(component, weight)` pairs in P1, P2, Trabalho order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn sum(&self) -> f64 {
        self.first_exam + self.second_exam + self.assignment
    }

    /// Rejects weight sets that do not add up to 1.0 within
    /// [`WEIGHT_SUM_TOLERANCE`].
    pub fn ensure_normalized(self) -> Result<Self, GradeError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(GradeError::WeightSum { sum });
        }
        Ok(self)
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Pass/fail outcome of a final average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Pass,
    Remediation,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pass => "Pass",
            Status::Remediation => "Remediation",
        })
    }
}

/// Five-band letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        })
    }
}

/// Outcome of the forward calculation.
///
/// When `error` is set the numeric fields hold the failing defaults
/// (0.0, [`Status::Remediation`], [`Letter::F`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub initial_average: f64,
    pub final_average: f64,
    pub status: Status,
    pub letter: Letter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GradeResult {
    /// Failing result carrying the message that aborted the calculation.
    pub fn failed(message: impl Into<String>) -> Self {
        GradeResult {
            initial_average: 0.0,
            final_average: 0.0,
            status: Status::Remediation,
            letter: Letter::F,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of the required-score solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequiredScoreResult {
    pub feasible: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_score: Option<f64>,
}

impl RequiredScoreResult {
    pub fn feasible(message: impl Into<String>, required_score: Option<f64>) -> Self {
        RequiredScoreResult {
            feasible: true,
            message: message.into(),
            required_score,
        }
    }

    pub fn infeasible(message: impl Into<String>) -> Self {
        RequiredScoreResult {
            feasible: false,
            message: message.into(),
            required_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_weights_sum_to_one() {
        assert!((Weights::STANDARD.sum() - 1.0).abs() < 1e-12);
        assert_eq!(Weights::default(), Weights::STANDARD);
    }

    #[test]
    fn test_weights_iter_order() {
        let order: Vec<_> = Weights::STANDARD.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Component::FirstExam,
                Component::SecondExam,
                Component::Assignment
            ]
        );
    }

    #[test]
    fn test_weights_parse() {
        let w = Weights::parse("0.4", " 0.4", "0.2").unwrap();
        assert_eq!(w, Weights::new(0.4, 0.4, 0.2));
    }

    #[test]
    fn test_weights_parse_names_bad_component() {
        assert_eq!(
            Weights::parse("0.35", "abc", ""),
            Err(GradeError::InvalidWeight {
                component: Component::SecondExam
            })
        );
        assert_eq!(
            GradeError::InvalidWeight {
                component: Component::Assignment
            }
            .to_string(),
            "Invalid weight for Trabalho"
        );
    }

    #[test]
    fn test_ensure_normalized() {
        assert!(Weights::new(0.35, 0.35, 0.305).ensure_normalized().is_ok());
        let err = Weights::new(0.5, 0.5, 0.5).ensure_normalized().unwrap_err();
        assert_eq!(err, GradeError::WeightSum { sum: 1.5 });
        assert_eq!(
            err.to_string(),
            "Weights must sum to 1.0 (current sum: 1.50)"
        );
    }

    #[test]
    fn test_failed_result_defaults() {
        let r = GradeResult::failed("boom");
        assert!(!r.is_ok());
        assert_eq!(r.initial_average, 0.0);
        assert_eq!(r.final_average, 0.0);
        assert_eq!(r.status, Status::Remediation);
        assert_eq!(r.letter, Letter::F);
        assert_eq!(r.error.as_deref(), Some("boom"));
    }
}
