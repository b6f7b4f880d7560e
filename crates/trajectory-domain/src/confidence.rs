//! Confidence computation
//!
//! Two independent measures:
//! 1. Dispersion confidence in [0, 1], from the spread of category scores and
//!    the distance of the overall score to the nearest band ceiling
//! 2. Behavioral confidence in 0..=100, a penalty ledger over answer timing,
//!    revisions, timeouts and validation-question consistency

use crate::scores::round2;
use crate::{BandTable, Category, CategoryScores, Label};

/// Multiplier turning the distance to a band ceiling into the boundary term
pub const BOUNDARY_SCALE: f64 = 2.0;

/// Divisor applied to the standard deviation in the consistency term
pub const DISPERSION_SCALE: f64 = 2.0;

/// Population standard deviation of the category scores
pub fn standard_deviation<C: Category>(scores: &CategoryScores<C>) -> f64 {
    let values = scores.values();
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Dispersion confidence in [0, 1]
///
/// `consistency = max(0, 1 - sigma / 2)`, `boundary = min(1, 2 * d)` where
/// `d` is the distance from `overall` to the nearest inner band ceiling. The
/// result is their mean, rounded to two decimals.
pub fn dispersion_confidence<C: Category, L: Label>(
    overall: f64,
    scores: &CategoryScores<C>,
    bands: &BandTable<L>,
) -> f64 {
    let consistency = (1.0 - standard_deviation(scores) / DISPERSION_SCALE).max(0.0);

    let distance = bands
        .inner_ceilings()
        .map(|ceiling| (overall - ceiling).abs())
        .fold(f64::INFINITY, f64::min);
    let boundary = (distance * BOUNDARY_SCALE).clamp(0.0, 1.0);

    round2((consistency + boundary) / 2.0)
}

/// Behavioral signals of one quiz session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceFactors {
    /// Mean time to answer, in milliseconds
    pub avg_answer_ms: f64,
    /// Number of revised answers
    pub answer_changes: u32,
    /// Number of questions that timed out
    pub timeouts: u32,
    /// Agreement with the cross-validation questions [0, 1]
    pub validation_consistency: f64,
}

/// Thresholds and penalties of the behavioral ledger
#[derive(Debug, Clone, PartialEq)]
pub struct BehavioralPolicy {
    /// Answers faster than this on average look like random clicking
    pub rushed_ms: f64,
    /// Penalty for rushed answering
    pub rushed_penalty: i32,
    /// Answers faster than this on average are still hurried
    pub hurried_ms: f64,
    /// Penalty for hurried answering
    pub hurried_penalty: i32,
    /// More revisions than this is heavy second-guessing
    pub heavy_revisions: u32,
    /// Penalty for heavy revising
    pub heavy_revision_penalty: i32,
    /// More revisions than this is light second-guessing
    pub light_revisions: u32,
    /// Penalty for light revising
    pub light_revision_penalty: i32,
    /// Penalty per timed-out question
    pub timeout_penalty: i32,
    /// Consistency below this contradicts the validation questions
    pub inconsistent_below: f64,
    /// Penalty for inconsistency
    pub inconsistent_penalty: i32,
    /// Consistency below this is shaky
    pub shaky_below: f64,
    /// Penalty for shaky consistency
    pub shaky_penalty: i32,
}

impl Default for BehavioralPolicy {
    fn default() -> Self {
        Self {
            rushed_ms: 2000.0,
            rushed_penalty: 20,
            hurried_ms: 5000.0,
            hurried_penalty: 10,
            heavy_revisions: 5,
            heavy_revision_penalty: 15,
            light_revisions: 2,
            light_revision_penalty: 8,
            timeout_penalty: 10,
            inconsistent_below: 0.6,
            inconsistent_penalty: 25,
            shaky_below: 0.8,
            shaky_penalty: 10,
        }
    }
}

/// Behavioral confidence in 0..=100
///
/// Starts at 100; each rule reads the raw factors, never the running total,
/// and the result is clamped to [0, 100].
pub fn behavioral_confidence(factors: &ConfidenceFactors, policy: &BehavioralPolicy) -> u8 {
    let mut confidence: i64 = 100;

    if factors.avg_answer_ms < policy.rushed_ms {
        confidence -= i64::from(policy.rushed_penalty);
    } else if factors.avg_answer_ms < policy.hurried_ms {
        confidence -= i64::from(policy.hurried_penalty);
    }

    if factors.answer_changes > policy.heavy_revisions {
        confidence -= i64::from(policy.heavy_revision_penalty);
    } else if factors.answer_changes > policy.light_revisions {
        confidence -= i64::from(policy.light_revision_penalty);
    }

    confidence -= i64::from(factors.timeouts) * i64::from(policy.timeout_penalty);

    if factors.validation_consistency < policy.inconsistent_below {
        confidence -= i64::from(policy.inconsistent_penalty);
    } else if factors.validation_consistency < policy.shaky_below {
        confidence -= i64::from(policy.shaky_penalty);
    }

    confidence.clamp(0, 100) as u8
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{tables, LifeDomain};
    use proptest::prelude::*;

    proptest! {
        /// Property: behavioral confidence stays within [0, 100]
        #[test]
        fn test_behavioral_range(
            avg in 0.0f64..20000.0,
            changes in 0u32..50,
            timeouts in 0u32..50,
            consistency in 0.0f64..=1.0,
        ) {
            let factors = ConfidenceFactors {
                avg_answer_ms: avg,
                answer_changes: changes,
                timeouts,
                validation_consistency: consistency,
            };
            let value = behavioral_confidence(&factors, &BehavioralPolicy::default());
            prop_assert!(value <= 100);
        }

        /// Property: dispersion confidence stays within [0, 1]
        #[test]
        fn test_dispersion_range(values in prop::collection::vec(0u32..=500, 6)) {
            let scores = CategoryScores::from_pairs(
                LifeDomain::ALL.iter().zip(values.iter()).map(|(d, v)| (*d, f64::from(*v) / 100.0)),
            );
            let overall = crate::composite::mean_score(&scores);
            let bands = tables::avatar_bands().unwrap();
            let confidence = dispersion_confidence(overall, &scores, &bands);
            prop_assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
