//! Configuration defects
//!
//! Scoring never fails on input data. The only errors of this crate describe
//! malformed configuration tables and are raised while the tables are built,
//! never per request.

use thiserror::Error;

/// A defect found while building a configuration table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigDefect {
    /// Category weights do not sum to 1.0
    #[error("category weights sum to {sum}, expected 1.0")]
    WeightSum {
        /// Actual sum of the weights
        sum: f64,
    },

    /// A weight lies outside [0, 1]
    #[error("weight {weight} for category '{category}' is outside [0, 1]")]
    WeightOutOfRange {
        /// Offending category
        category: String,
        /// Offending weight
        weight: f64,
    },

    /// A table does not mention every category
    #[error("{table} is missing category '{category}'")]
    MissingCategory {
        /// Name of the table
        table: &'static str,
        /// Category absent from the table
        category: String,
    },

    /// A table mentions a category twice
    #[error("{table} lists category '{category}' more than once")]
    DuplicateCategory {
        /// Name of the table
        table: &'static str,
        /// Repeated category
        category: String,
    },

    /// A category name does not belong to the enumeration
    #[error("unknown category '{name}'")]
    UnknownCategory {
        /// Unrecognized name
        name: String,
    },

    /// A label name does not belong to the enumeration
    #[error("unknown label '{name}'")]
    UnknownLabel {
        /// Unrecognized name
        name: String,
    },

    /// The band table is empty
    #[error("band table has no bands")]
    EmptyBands,

    /// A band's lower bound exceeds its upper bound
    #[error("band '{label}' is inverted: {min} > {max}")]
    InvertedBand {
        /// Label of the band
        label: String,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// The bands do not start at 1.0 and end at 5.0
    #[error("bands cover [{min}, {max}], expected [1, 5]")]
    BandCoverage {
        /// Lowest covered value
        min: f64,
        /// Highest covered value
        max: f64,
    },

    /// Two consecutive bands leave a gap
    #[error("gap between bands '{lower}' and '{upper}'")]
    BandGap {
        /// Label of the lower band
        lower: String,
        /// Label of the upper band
        upper: String,
    },

    /// Two consecutive bands overlap
    #[error("bands '{lower}' and '{upper}' overlap")]
    BandOverlap {
        /// Label of the lower band
        lower: String,
        /// Label of the upper band
        upper: String,
    },

    /// A label owns more than one band
    #[error("label '{label}' appears in more than one band")]
    DuplicateLabel {
        /// Repeated label
        label: String,
    },

    /// An override rule has no conditions and would always fire
    #[error("override rule '{rule}' has no conditions")]
    EmptyOverride {
        /// Name of the rule
        rule: String,
    },
}
