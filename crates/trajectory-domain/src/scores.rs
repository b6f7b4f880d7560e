//! Per-category scores

use crate::Category;
use std::collections::BTreeMap;

/// Round to two decimal places
///
/// Applied to category scores as soon as they are computed; every later
/// stage works on the rounded values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score of every category of an enumeration
///
/// Always total: a category without answers holds 0.0, never a missing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores<C: Category> {
    scores: BTreeMap<C, f64>,
}

impl<C: Category> CategoryScores<C> {
    /// Build scores by evaluating `f` for every category
    pub fn from_fn(mut f: impl FnMut(C) -> f64) -> Self {
        Self {
            scores: C::ALL.iter().map(|c| (*c, f(*c))).collect(),
        }
    }

    /// Build scores from explicit pairs; absent categories score 0.0
    pub fn from_pairs(pairs: impl IntoIterator<Item = (C, f64)>) -> Self {
        let given: BTreeMap<C, f64> = pairs.into_iter().collect();
        Self::from_fn(|c| given.get(&c).copied().unwrap_or(0.0))
    }

    /// Score of one category
    pub fn get(&self, category: C) -> f64 {
        self.scores.get(&category).copied().unwrap_or(0.0)
    }

    /// Iterate in canonical category order
    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        C::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Scores in canonical category order
    pub fn values(&self) -> Vec<f64> {
        self.iter().map(|(_, score)| score).collect()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        C::ALL.len()
    }

    /// Whether the enumeration is empty
    pub fn is_empty(&self) -> bool {
        C::ALL.is_empty()
    }
}
