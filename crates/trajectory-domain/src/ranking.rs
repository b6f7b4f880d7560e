//! Weakest-category ranking with configured tie-break precedence

use crate::{Category, CategoryScores, ConfigDefect};

/// Fully ordered precedence over categories, used to break score ties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieBreakOrder<C: Category> {
    order: Vec<C>,
}

impl<C: Category> TieBreakOrder<C> {
    /// Build an order; every category must appear exactly once
    pub fn new(order: Vec<C>) -> Result<Self, ConfigDefect> {
        for (i, category) in order.iter().enumerate() {
            if order[..i].contains(category) {
                return Err(ConfigDefect::DuplicateCategory {
                    table: "tie-break order",
                    category: category.as_str().to_string(),
                });
            }
        }
        if let Some(missing) = C::ALL.iter().find(|c| !order.contains(c)) {
            return Err(ConfigDefect::MissingCategory {
                table: "tie-break order",
                category: missing.as_str().to_string(),
            });
        }
        Ok(Self { order })
    }

    /// Position of a category in the precedence list
    pub fn rank(&self, category: C) -> usize {
        self.order
            .iter()
            .position(|c| *c == category)
            .unwrap_or(self.order.len())
    }

    /// Categories in precedence order
    pub fn as_slice(&self) -> &[C] {
        &self.order
    }
}

impl<C: Category> Default for TieBreakOrder<C> {
    /// Canonical enumeration order
    fn default() -> Self {
        Self {
            order: C::ALL.to_vec(),
        }
    }
}

/// Every category, weakest first
///
/// Sorted by ascending score; equal scores follow the tie-break order, never
/// the order in which scores were produced.
pub fn rank_ascending<C: Category>(scores: &CategoryScores<C>, order: &TieBreakOrder<C>) -> Vec<C> {
    let mut ranked: Vec<(C, f64)> = scores.iter().collect();
    ranked.sort_by(|(a, a_score), (b, b_score)| {
        a_score
            .total_cmp(b_score)
            .then_with(|| order.rank(*a).cmp(&order.rank(*b)))
    });
    ranked.into_iter().map(|(category, _)| category).collect()
}

/// The `n` weakest categories, weakest first
///
/// Returns every category when `n` exceeds the enumeration.
pub fn lowest_n<C: Category>(scores: &CategoryScores<C>, n: usize, order: &TieBreakOrder<C>) -> Vec<C> {
    let mut ranked = rank_ascending(scores, order);
    ranked.truncate(n);
    ranked
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::LifeDomain;
    use proptest::prelude::*;

    proptest! {
        /// Property: ranking depends only on the scores, not on how they were supplied
        #[test]
        fn test_ranking_ignores_input_order(
            values in prop::collection::vec(0u32..=10, 6),
            rotation in 0usize..6,
        ) {
            let pairs: Vec<(LifeDomain, f64)> = LifeDomain::ALL
                .iter()
                .zip(values.iter())
                .map(|(d, v)| (*d, f64::from(*v) / 2.0))
                .collect();
            let mut rotated = pairs.clone();
            rotated.rotate_left(rotation);

            let order = TieBreakOrder::default();
            let a = lowest_n(&CategoryScores::from_pairs(pairs), 6, &order);
            let b = lowest_n(&CategoryScores::from_pairs(rotated), 6, &order);
            prop_assert_eq!(a, b);
        }

        /// Property: the ranking is sorted by score
        #[test]
        fn test_ranking_is_ascending(values in prop::collection::vec(0u32..=10, 6)) {
            let scores = CategoryScores::from_pairs(
                LifeDomain::ALL.iter().zip(values.iter()).map(|(d, v)| (*d, f64::from(*v) / 2.0)),
            );
            let ranked = rank_ascending(&scores, &TieBreakOrder::default());
            for pair in ranked.windows(2) {
                prop_assert!(scores.get(pair[0]) <= scores.get(pair[1]));
            }
        }
    }
}
