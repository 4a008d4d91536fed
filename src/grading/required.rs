//! Inverse calculation: the score still needed to reach a target average.
//!
//! All unknown components are treated as one bucket holding the weight not
//! yet covered by known scores. The reported score is what every unknown
//! component would need if they were all graded the same.

use tracing::{debug, info, warn};

use crate::grading::grade::PASS_THRESHOLD;
use crate::grading::types::{KnownScores, RequiredScoreResult, Weights};
use crate::grading::utility::round2;
use crate::parser::{MAX_GRADE, parse_number};

/// Remaining weight at or below this is treated as zero.
const WEIGHT_EPSILON: f64 = 1e-9;

/// Target used when the caller does not supply one.
pub const DEFAULT_TARGET: f64 = PASS_THRESHOLD;

/// Computes the minimum score required over the unknown components to reach
/// `target`.
///
/// Known scores are read in weight order (P1, P2, Trabalho); the first one
/// that is not numeric makes the result infeasible. Known scores are not
/// range-checked. `weights` are expected to sum to 1.0.
#[tracing::instrument(level = "debug", skip(known, weights), fields(known = known.len()))]
pub fn required_score_for_target(
    known: &KnownScores,
    weights: &Weights,
    target: f64,
) -> RequiredScoreResult {
    let mut known_weight_sum = 0.0;
    let mut known_contribution = 0.0;

    for (component, weight) in weights.iter() {
        let Some(Some(raw)) = known.get(&component) else {
            continue;
        };
        if raw.is_blank() {
            continue;
        }

        let Ok(value) = parse_number(raw) else {
            warn!(%component, value = %raw, "Known score is not numeric");
            return RequiredScoreResult::infeasible(format!("Non-numeric value for {component}"));
        };

        known_contribution += value * weight;
        known_weight_sum += weight;
    }

    let remaining_weight = 1.0 - known_weight_sum;
    debug!(known_weight_sum, known_contribution, remaining_weight, "Known scores folded");

    if remaining_weight <= WEIGHT_EPSILON {
        let current = known_contribution;
        return if current >= target {
            info!(current, "Target already reached");
            RequiredScoreResult::feasible(
                format!(
                    "Target average already reached ({current:.2}) with no additional score needed."
                ),
                None,
            )
        } else {
            info!(current, "No component left to adjust");
            RequiredScoreResult::infeasible(format!(
                "Target average cannot be reached; no remaining component to adjust (current average {current:.2})."
            ))
        };
    }

    let required = (target - known_contribution) / remaining_weight;
    debug!(required, "Raw required score");

    if required < 0.0 {
        return RequiredScoreResult::feasible(
            "No score needed (any score >= 0 works). Theoretical minimum score: 0.",
            Some(0.0),
        );
    }

    if required > MAX_GRADE {
        info!(required, "Target out of reach");
        return RequiredScoreResult::infeasible(format!(
            "Target average cannot be reached; required score would be {required:.2} (>10)."
        ));
    }

    info!(required, "Required score found");
    RequiredScoreResult::feasible(
        format!(
            "Minimum required score: {required:.2} (weighted average over the remaining components)."
        ),
        Some(round2(required)),
    )
}
