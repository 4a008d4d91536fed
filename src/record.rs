use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::calculator::GradeInputs;
use crate::grading::types::{GradeResult, Letter, Status};

/// One row of the calculation history CSV.
#[derive(Debug, Clone, Serialize)]
pub struct GradeRecord {
    pub timestamp: DateTime<Utc>,

    // inputs, as entered
    pub p1: String,
    pub p2: String,
    pub trabalho: String,
    pub p3: Option<String>,

    // outcome
    pub initial_average: f64,
    pub final_average: f64,
    pub status: Status,
    pub letter: Letter,

    pub error_message: Option<String>,
}

impl GradeRecord {
    pub fn from_result(inputs: &GradeInputs, result: &GradeResult) -> Self {
        GradeRecord {
            timestamp: Utc::now(),
            p1: inputs.first_exam.to_string(),
            p2: inputs.second_exam.to_string(),
            trabalho: inputs.assignment.to_string(),
            p3: inputs.supplied_makeup().map(ToString::to_string),
            initial_average: result.initial_average,
            final_average: result.final_average,
            status: result.status,
            letter: result.letter,
            error_message: result.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_copies_outcome() {
        let inputs = GradeInputs::new("4", "5", "6");
        let result = inputs.calculate();
        let record = GradeRecord::from_result(&inputs, &result);

        assert_eq!(record.p1, "4");
        assert_eq!(record.trabalho, "6");
        assert_eq!(record.p3, None);
        assert_eq!(record.final_average, 4.95);
        assert_eq!(record.status, Status::Remediation);
        assert_eq!(record.letter, Letter::D);
        assert!(record.error_message.is_none());
    }

    #[test]
    fn test_from_failed_result() {
        let inputs = GradeInputs::new("4", "abc", "6").with_makeup(" 7 ");
        let result = inputs.calculate();
        let record = GradeRecord::from_result(&inputs, &result);

        assert_eq!(record.p3.as_deref(), Some("7"));
        assert_eq!(record.letter, Letter::F);
        assert_eq!(record.error_message.as_deref(), Some("Value is not numeric"));
    }
}
