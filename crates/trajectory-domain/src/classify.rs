//! Classification: overall score and category signals -> label
//!
//! Labels come from a band table over the overall score. Override rules are
//! checked first, in declared order; the first matching rule forces its
//! label regardless of the overall score.

use crate::{Category, CategoryScores, ConfigDefect, Label};

/// Display resolution of band bounds
///
/// Consecutive bands are written as `[1.0, 3.1]`, `[3.2, 4.1]`: the next
/// band starts one resolution step above the previous ceiling.
pub const BAND_RESOLUTION: f64 = 0.1;

/// Lowest value the band table must cover
pub const SCALE_MIN: f64 = 1.0;

/// Highest value the band table must cover
pub const SCALE_MAX: f64 = 5.0;

const EPSILON: f64 = 1e-9;

/// A closed score interval owned by one label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<L: Label> {
    /// Label assigned inside the band
    pub label: L,
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl<L: Label> Band<L> {
    /// Create a band
    pub fn new(label: L, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }
}

/// Ordered bands partitioning [1, 5]
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable<L: Label> {
    bands: Vec<Band<L>>,
}

impl<L: Label> BandTable<L> {
    /// Build and validate a band table
    ///
    /// Bands must be given lowest first, start at 1.0, end at 5.0, and follow
    /// each other with neither a gap nor an overlap at [`BAND_RESOLUTION`].
    pub fn new(bands: Vec<Band<L>>) -> Result<Self, ConfigDefect> {
        let (first, last) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ConfigDefect::EmptyBands),
        };

        for (i, band) in bands.iter().enumerate() {
            if band.min > band.max {
                return Err(ConfigDefect::InvertedBand {
                    label: band.label.as_str().to_string(),
                    min: band.min,
                    max: band.max,
                });
            }
            if bands[..i].iter().any(|b| b.label == band.label) {
                return Err(ConfigDefect::DuplicateLabel {
                    label: band.label.as_str().to_string(),
                });
            }
        }

        if (first.min - SCALE_MIN).abs() > EPSILON || (last.max - SCALE_MAX).abs() > EPSILON {
            return Err(ConfigDefect::BandCoverage {
                min: first.min,
                max: last.max,
            });
        }

        for pair in bands.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let step = upper.min - lower.max;
            if step <= EPSILON {
                return Err(ConfigDefect::BandOverlap {
                    lower: lower.label.as_str().to_string(),
                    upper: upper.label.as_str().to_string(),
                });
            }
            if step > BAND_RESOLUTION + EPSILON {
                return Err(ConfigDefect::BandGap {
                    lower: lower.label.as_str().to_string(),
                    upper: upper.label.as_str().to_string(),
                });
            }
        }

        Ok(Self { bands })
    }

    /// Label of the band containing `value`
    ///
    /// A value belongs to the first band whose ceiling it does not exceed, so
    /// values between two displayed bands fall into the upper one, values
    /// below 1.0 (nothing answered) into the lowest, values above 5.0 into
    /// the highest.
    pub fn label_for(&self, value: f64) -> L {
        self.bands
            .iter()
            .find(|band| value <= band.max + EPSILON)
            .or(self.bands.last())
            .map(|band| band.label)
            .unwrap_or(L::ALL[0])
    }

    /// Ceilings separating consecutive bands
    pub fn inner_ceilings(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands[..self.bands.len().saturating_sub(1)]
            .iter()
            .map(|band| band.max)
    }

    /// Bands, lowest first
    pub fn bands(&self) -> &[Band<L>] {
        &self.bands
    }
}

/// Comparison applied to one category score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Score <= limit
    AtMost(f64),
    /// Score >= limit
    AtLeast(f64),
}

impl Threshold {
    fn holds(&self, score: f64) -> bool {
        match *self {
            Threshold::AtMost(limit) => score <= limit,
            Threshold::AtLeast(limit) => score >= limit,
        }
    }
}

/// One condition of an override rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition<C: Category> {
    /// Category inspected
    pub category: C,
    /// Comparison applied to its score
    pub threshold: Threshold,
}

impl<C: Category> Condition<C> {
    /// Condition `score(category) <= limit`
    pub fn at_most(category: C, limit: f64) -> Self {
        Self {
            category,
            threshold: Threshold::AtMost(limit),
        }
    }

    /// Condition `score(category) >= limit`
    pub fn at_least(category: C, limit: f64) -> Self {
        Self {
            category,
            threshold: Threshold::AtLeast(limit),
        }
    }
}

/// Forces a label when every condition holds
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideRule<C: Category, L: Label> {
    /// Name reported when the rule fires
    pub name: String,
    /// Conditions, all of which must hold
    pub conditions: Vec<Condition<C>>,
    /// Label forced by the rule
    pub forced: L,
}

impl<C: Category, L: Label> OverrideRule<C, L> {
    /// Create a rule
    pub fn new(name: impl Into<String>, conditions: Vec<Condition<C>>, forced: L) -> Self {
        Self {
            name: name.into(),
            conditions,
            forced,
        }
    }

    /// Whether every condition holds for the given scores
    pub fn matches(&self, scores: &CategoryScores<C>) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.threshold.holds(scores.get(condition.category)))
    }
}

/// Outcome of a classification
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<L: Label> {
    /// Assigned label
    pub label: L,
    /// Name of the override rule that forced the label, if any
    pub forced_by: Option<String>,
}

/// Band table plus ordered override rules
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier<C: Category, L: Label> {
    bands: BandTable<L>,
    overrides: Vec<OverrideRule<C, L>>,
}

impl<C: Category, L: Label> Classifier<C, L> {
    /// Build a classifier; rules are evaluated in the given order
    pub fn new(bands: BandTable<L>, overrides: Vec<OverrideRule<C, L>>) -> Result<Self, ConfigDefect> {
        if let Some(rule) = overrides.iter().find(|rule| rule.conditions.is_empty()) {
            return Err(ConfigDefect::EmptyOverride {
                rule: rule.name.clone(),
            });
        }
        Ok(Self { bands, overrides })
    }

    /// Classifier without override rules
    pub fn bands_only(bands: BandTable<L>) -> Self {
        Self {
            bands,
            overrides: Vec::new(),
        }
    }

    /// Label for an overall score and its category scores
    pub fn classify(&self, overall: f64, scores: &CategoryScores<C>) -> L {
        self.explain(overall, scores).label
    }

    /// Label plus the override rule responsible, if any
    pub fn explain(&self, overall: f64, scores: &CategoryScores<C>) -> Classification<L> {
        if let Some(rule) = self.overrides.iter().find(|rule| rule.matches(scores)) {
            return Classification {
                label: rule.forced,
                forced_by: Some(rule.name.clone()),
            };
        }
        Classification {
            label: self.bands.label_for(overall),
            forced_by: None,
        }
    }

    /// The band table
    pub fn bands(&self) -> &BandTable<L> {
        &self.bands
    }

    /// Override rules in priority order
    pub fn overrides(&self) -> &[OverrideRule<C, L>] {
        &self.overrides
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{tables, Avatar, Lane};
    use proptest::prelude::*;

    proptest! {
        /// Property: every value of [1, 5] lands in exactly one band
        #[test]
        fn test_bands_partition_scale(hundredths in 100u32..=500) {
            let value = f64::from(hundredths) / 100.0;
            let bands = tables::avatar_bands().unwrap();
            let containing = bands
                .bands()
                .iter()
                .filter(|b| value >= b.min - BAND_RESOLUTION + 1e-9 && value <= b.max + 1e-9)
                .count();
            prop_assert_eq!(containing, 1);
            let label = bands.label_for(value);
            prop_assert!(Avatar::ALL.contains(&label));
        }

        /// Property: a higher overall never maps to a lower band
        #[test]
        fn test_band_labels_are_monotonic(a in 0u32..=500, b in 0u32..=500) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let bands = tables::lane_diagnostic_bands().unwrap();
            let low_label: Lane = bands.label_for(f64::from(low) / 100.0);
            let high_label: Lane = bands.label_for(f64::from(high) / 100.0);
            prop_assert!(low_label.rank() <= high_label.rank());
        }
    }
}
