//! Composite scoring: category scores -> overall score

use crate::scores::round2;
use crate::{Category, CategoryScores, ConfigDefect};
use std::collections::BTreeMap;

/// Tolerance when checking that weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Static per-category weights, validated to sum to 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable<C: Category> {
    weights: BTreeMap<C, f64>,
}

impl<C: Category> WeightTable<C> {
    /// Build a weight table
    ///
    /// Every category must appear exactly once with a weight in [0, 1], and
    /// the weights must sum to 1.0.
    pub fn new(weights: impl IntoIterator<Item = (C, f64)>) -> Result<Self, ConfigDefect> {
        let mut table = BTreeMap::new();
        for (category, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigDefect::WeightOutOfRange {
                    category: category.as_str().to_string(),
                    weight,
                });
            }
            if table.insert(category, weight).is_some() {
                return Err(ConfigDefect::DuplicateCategory {
                    table: "weight table",
                    category: category.as_str().to_string(),
                });
            }
        }

        if let Some(missing) = C::ALL.iter().find(|c| !table.contains_key(c)) {
            return Err(ConfigDefect::MissingCategory {
                table: "weight table",
                category: missing.as_str().to_string(),
            });
        }

        let sum: f64 = C::ALL.iter().map(|c| table[c]).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigDefect::WeightSum { sum });
        }

        Ok(Self { weights: table })
    }

    /// Weight of one category
    pub fn weight(&self, category: C) -> f64 {
        self.weights.get(&category).copied().unwrap_or(0.0)
    }
}

/// How category scores are reduced to one overall score
#[derive(Debug, Clone, PartialEq)]
pub enum Composite<C: Category> {
    /// Arithmetic mean over every category, zeros included
    Mean,

    /// Weighted sum over the weight table
    Weighted(WeightTable<C>),
}

impl<C: Category> Composite<C> {
    /// Overall score, rounded to two decimals
    pub fn score(&self, scores: &CategoryScores<C>) -> f64 {
        match self {
            Composite::Mean => mean_score(scores),
            Composite::Weighted(table) => weighted_score(scores, table),
        }
    }
}

/// Unweighted mean of every category score
///
/// Unanswered categories contribute their 0.0, which drags the composite
/// down instead of being excluded.
pub fn mean_score<C: Category>(scores: &CategoryScores<C>) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: f64 = scores.iter().map(|(_, score)| score).sum();
    round2(total / scores.len() as f64)
}

/// Weighted composite: sum(score * weight) / sum(weight)
pub fn weighted_score<C: Category>(scores: &CategoryScores<C>, weights: &WeightTable<C>) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (category, score) in scores.iter() {
        let weight = weights.weight(category);
        weighted_sum += score * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        round2(weighted_sum / total_weight)
    } else {
        0.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{aggregate, tables, AnswerSet, LaneCategory};
    use proptest::prelude::*;

    fn answers(prefix: &str, values: &[u8]) -> AnswerSet {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("{}{}", prefix, i + 1), *v))
            .collect()
    }

    fn raised(values: &[u8], index: usize) -> Vec<u8> {
        let mut values = values.to_vec();
        let i = index % values.len();
        values[i] = (values[i] + 1).min(5);
        values
    }

    fn life_overall(values: &[u8]) -> f64 {
        Composite::Mean.score(&aggregate(&answers("Q", values), &tables::life_question_map()))
    }

    fn lane_overall(weights: &WeightTable<LaneCategory>, values: &[u8]) -> f64 {
        let composite = Composite::Weighted(weights.clone());
        composite.score(&aggregate(&answers("LD", values), &tables::lane_question_map()))
    }

    proptest! {
        /// Property: the life mean stays in [0, 5] with at most two decimals
        #[test]
        fn test_mean_in_range_and_rounded(values in prop::collection::vec(1u8..=5, 15)) {
            let overall = life_overall(&values);
            prop_assert!((0.0..=5.0).contains(&overall));
            prop_assert_eq!(round2(overall), overall);
        }

        /// Property: raising one life answer never lowers the mean
        #[test]
        fn test_mean_is_monotonic(values in prop::collection::vec(1u8..=5, 15), index in 0usize..15) {
            prop_assert!(life_overall(&raised(&values, index)) >= life_overall(&values));
        }

        /// Property: the weighted lane composite stays in [0, 5] with at most two decimals
        #[test]
        fn test_weighted_in_range_and_rounded(values in prop::collection::vec(1u8..=5, 18)) {
            let weights = tables::lane_weights().unwrap();
            let overall = lane_overall(&weights, &values);
            prop_assert!((0.0..=5.0).contains(&overall));
            prop_assert_eq!(round2(overall), overall);
        }

        /// Property: raising one lane answer never lowers the weighted composite
        #[test]
        fn test_weighted_is_monotonic(values in prop::collection::vec(1u8..=5, 18), index in 0usize..18) {
            let weights = tables::lane_weights().unwrap();
            prop_assert!(lane_overall(&weights, &raised(&values, index)) >= lane_overall(&weights, &values));
        }
    }
}
