//! Forward calculation: raw grades in, classified final average out.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::GradeError;
use crate::grading::average::{substitute_and_average, weighted_average};
use crate::grading::grade::{PASS_THRESHOLD, letter_grade, pass_fail};
use crate::grading::types::{GradeResult, Weights};
use crate::grading::utility::round2;
use crate::parser::{RawValue, parse_grade};

/// The raw scores of one student, as entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeInputs {
    pub first_exam: RawValue,
    pub second_exam: RawValue,
    pub assignment: RawValue,
    pub makeup: Option<RawValue>,
}

impl GradeInputs {
    pub fn new(
        first_exam: impl Into<RawValue>,
        second_exam: impl Into<RawValue>,
        assignment: impl Into<RawValue>,
    ) -> Self {
        GradeInputs {
            first_exam: first_exam.into(),
            second_exam: second_exam.into(),
            assignment: assignment.into(),
            makeup: None,
        }
    }

    pub fn with_makeup(mut self, makeup: impl Into<RawValue>) -> Self {
        self.makeup = Some(makeup.into());
        self
    }

    /// The makeup score, if one was actually supplied.
    pub fn supplied_makeup(&self) -> Option<&RawValue> {
        self.makeup.as_ref().filter(|m| !m.is_blank())
    }

    /// Fails with [`GradeError::MissingRequired`] when P1, P2 or Trabalho
    /// is blank.
    pub fn ensure_filled(&self) -> Result<(), GradeError> {
        if [&self.first_exam, &self.second_exam, &self.assignment]
            .iter()
            .any(|v| v.is_blank())
        {
            return Err(GradeError::MissingRequired);
        }
        Ok(())
    }

    pub fn calculate(&self) -> GradeResult {
        calculate_grades(
            &self.first_exam,
            &self.second_exam,
            &self.assignment,
            self.makeup.as_ref(),
        )
    }
}

/// Validates the three mandatory scores, averages them and, when the
/// student is below the pass threshold, applies the makeup exam.
///
/// The first invalid input aborts the calculation; its message is returned
/// in [`GradeResult::error`] with the numeric fields at their failing
/// defaults.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        first_exam = %first_exam,
        second_exam = %second_exam,
        assignment = %assignment,
        makeup = ?makeup.map(|m| m.to_string()),
    )
)]
pub fn calculate_grades(
    first_exam: &RawValue,
    second_exam: &RawValue,
    assignment: &RawValue,
    makeup: Option<&RawValue>,
) -> GradeResult {
    match try_calculate(first_exam, second_exam, assignment, makeup) {
        Ok(result) => {
            info!(
                initial_average = result.initial_average,
                final_average = result.final_average,
                status = %result.status,
                letter = %result.letter,
                "Grades calculated"
            );
            result
        }
        Err(e) => {
            warn!(error = %e, "Grade input rejected");
            GradeResult::failed(e.to_string())
        }
    }
}

fn try_calculate(
    first_exam: &RawValue,
    second_exam: &RawValue,
    assignment: &RawValue,
    makeup: Option<&RawValue>,
) -> Result<GradeResult, GradeError> {
    let weights = Weights::STANDARD;

    let p1 = parse_grade(first_exam)?.value();
    let p2 = parse_grade(second_exam)?.value();
    let work = parse_grade(assignment)?.value();

    // Compared after rounding: 4/8/6 sums to 5.999999999999999 in f64.
    let initial_average = round2(weighted_average(p1, p2, work, &weights));
    let mut final_average = initial_average;

    if initial_average < PASS_THRESHOLD {
        if let Some(raw) = makeup.filter(|m| !m.is_blank()) {
            let p3 = parse_grade(raw)?.value();
            final_average = round2(substitute_and_average(p1, p2, p3, work, &weights));
            debug!(p3, final_average, "Makeup exam applied");
        }
    }

    Ok(GradeResult {
        initial_average,
        final_average,
        status: pass_fail(final_average),
        letter: letter_grade(final_average),
        error: None,
    })
}
