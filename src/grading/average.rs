use crate::grading::types::Weights;

/// Weighted sum of the three components.
///
/// Inputs are trusted to be validated grades; no range check is made.
pub fn weighted_average(first_exam: f64, second_exam: f64, assignment: f64, weights: &Weights) -> f64 {
    first_exam * weights.first_exam
        + second_exam * weights.second_exam
        + assignment * weights.assignment
}

/// Replaces the lower of the two exams with `replacement` and recomputes the
/// weighted average.
///
/// The higher exam keeps its own slot. On a tie the second exam is the one
/// replaced.
pub fn substitute_and_average(
    first_exam: f64,
    second_exam: f64,
    replacement: f64,
    assignment: f64,
    weights: &Weights,
) -> f64 {
    if first_exam >= second_exam {
        weighted_average(first_exam, replacement, assignment, weights)
    } else {
        weighted_average(replacement, second_exam, assignment, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: Weights = Weights::STANDARD;

    #[test]
    fn test_weighted_average_extremes() {
        assert_eq!(weighted_average(10.0, 10.0, 10.0, &W), 10.0);
        assert_eq!(weighted_average(0.0, 0.0, 0.0, &W), 0.0);
    }

    #[test]
    fn test_weighted_average_mixed() {
        let avg = weighted_average(4.0, 5.0, 6.0, &W);
        assert!((avg - 4.95).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_average_custom_weights() {
        let w = Weights::new(0.5, 0.25, 0.25);
        assert_eq!(weighted_average(8.0, 4.0, 4.0, &w), 6.0);
    }

    #[test]
    fn test_substitute_replaces_lower_first() {
        assert_eq!(
            substitute_and_average(4.0, 8.0, 9.0, 6.0, &W),
            weighted_average(9.0, 8.0, 6.0, &W)
        );
    }

    #[test]
    fn test_substitute_replaces_lower_second() {
        assert_eq!(
            substitute_and_average(8.0, 3.0, 7.0, 6.0, &W),
            weighted_average(8.0, 7.0, 6.0, &W)
        );
    }

    #[test]
    fn test_substitute_tie_replaces_second() {
        let w = Weights::new(0.5, 0.2, 0.3);
        assert_eq!(
            substitute_and_average(5.0, 5.0, 8.0, 7.0, &w),
            weighted_average(5.0, 8.0, 7.0, &w)
        );
        assert_eq!(
            substitute_and_average(5.0, 5.0, 8.0, 7.0, &W),
            weighted_average(5.0, 8.0, 7.0, &W)
        );
    }

    #[test]
    fn test_substitute_can_lower_average() {
        // The replacement always applies, even when it is worse.
        let replaced = substitute_and_average(2.0, 6.0, 1.0, 5.0, &W);
        assert!(replaced < weighted_average(2.0, 6.0, 5.0, &W));
    }
}
