use chrono::{TimeZone, Utc};
use grade_calc::grading::{
    Component, GradeInputs, KnownScores, Letter, Status, Weights, calculate_grades,
    letter_grade, pass_fail, required_score_for_target, weighted_average,
};
use grade_calc::output::{export_report, render_report};
use grade_calc::{GradeError, RawValue, parse_grade};
use std::fs;

#[test]
fn test_full_pipeline() {
    let inputs = GradeInputs::new("4", "5", "6");
    let result = inputs.calculate();

    assert!(result.is_ok());
    assert_eq!(result.initial_average, 4.95);
    assert_eq!(result.final_average, 4.95);
    assert_eq!(result.status, Status::Remediation);
    assert_eq!(result.letter, Letter::D);
}

#[test]
fn test_primitives_compose() {
    let grades: Vec<f64> = ["8", "6.5", "7"]
        .iter()
        .map(|s| parse_grade(&RawValue::from(*s)).map(f64::from))
        .collect::<Result<_, GradeError>>()
        .unwrap();

    let avg = weighted_average(grades[0], grades[1], grades[2], &Weights::STANDARD);
    assert_eq!(pass_fail(avg), Status::Pass);
    assert_eq!(letter_grade(avg), Letter::B);
}

#[test]
fn test_forward_matches_library_entry_point() {
    let p1 = RawValue::from(2.0);
    let p2 = RawValue::from(6.0);
    let work = RawValue::from(5.0);
    let p3 = RawValue::from("8");

    let direct = calculate_grades(&p1, &p2, &work, Some(&p3));
    let via_inputs = GradeInputs::new(2.0, 6.0, 5.0).with_makeup("8").calculate();

    assert_eq!(direct, via_inputs);
    // 2/6/5 -> 4.3, P1 replaced by 8 -> 6.4
    assert_eq!(direct.initial_average, 4.3);
    assert_eq!(direct.final_average, 6.4);
    assert_eq!(direct.status, Status::Pass);
}

#[test]
fn test_required_then_forward_reaches_target() {
    let mut known = KnownScores::new();
    known.insert(Component::FirstExam, Some(RawValue::from("8")));

    let required = required_score_for_target(&known, &Weights::STANDARD, 6.0);
    let score = required.required_score.unwrap();
    assert_eq!(score, 4.92);

    let result = GradeInputs::new(8.0, score, score).calculate();
    assert_eq!(result.status, Status::Pass);
}

#[test]
fn test_export_report_to_directory() {
    let dir = std::env::temp_dir().join("grade_calc_integration_export");
    let _ = fs::remove_dir_all(&dir);

    let generated_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let inputs = GradeInputs::new("9", "9.5", "10");
    let result = inputs.calculate();

    let path = export_report(&dir, &inputs, &result, generated_at).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(content, render_report(&inputs, &result, generated_at));
    assert!(content.contains("Letter Grade: A"));

    fs::remove_dir_all(&dir).unwrap();
}
