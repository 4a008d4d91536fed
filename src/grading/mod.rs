//! Grade averaging, classification and required-score solving.
//!
//! This module validates raw scores, computes the 35/35/30 weighted
//! average, applies the makeup exam, assigns pass/fail and letter grades,
//! and solves for the score still needed to reach a target average.

pub mod average;
pub mod calculator;
pub mod grade;
pub mod required;
pub mod types;
pub mod utility;

pub use average::{substitute_and_average, weighted_average};
pub use calculator::{GradeInputs, calculate_grades};
pub use grade::{PASS_THRESHOLD, letter_grade, pass_fail};
pub use required::required_score_for_target;
pub use types::{
    Component, GradeResult, KnownScores, Letter, RequiredScoreResult, Status, Weights,
};
