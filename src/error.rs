//! Error types for grade validation and weight handling.

use thiserror::Error;

use crate::grading::types::Component;

/// Reasons a raw input is rejected.
///
/// The `Display` text of each variant is the message surfaced to the user,
/// so the forward pipeline reports it verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    #[error("Please fill in P1, P2 and Trabalho")]
    MissingRequired,

    #[error("Value is not numeric")]
    InvalidGrade,

    #[error("Negative values are not allowed")]
    NegativeGrade,

    #[error("Limit exceeded (maximum: 10)")]
    GradeTooHigh,

    #[error("Invalid weight for {component}")]
    InvalidWeight { component: Component },

    #[error("Weights must sum to 1.0 (current sum: {sum:.2})")]
    WeightSum { sum: f64 },

    #[error("Invalid target average")]
    InvalidTarget,
}
