//! Result records - one scored submission, ready for storage

use crate::{AnswerSet, Report};
use std::fmt;

/// Identifier of a result record, based on UUIDv7
///
/// Sorts chronologically; the top 48 bits carry the creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u128);

impl RecordId {
    /// Generate a new UUIDv7-based id
    ///
    /// # Examples
    ///
    /// ```
    /// use trajectory_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// assert!(id.timestamp() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Wrap a raw value read back from storage
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse the hyphenated UUID form
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        uuid::Uuid::parse_str(s).map(|u| Self(u.as_u128()))
    }

    /// Raw value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Creation time, milliseconds since the Unix epoch
    pub fn timestamp(&self) -> u64 {
        (self.0 >> 80) as u64
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A scored submission
///
/// Immutable once created; rescoring produces a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Unique identifier
    pub id: RecordId,
    /// Assessment module that produced the record
    pub module_id: String,
    /// Accepted answers
    pub answers: AnswerSet,
    /// Derived report
    pub report: Report,
    /// Creation time, milliseconds since the Unix epoch
    pub created_at: u64,
}

impl ResultRecord {
    /// New record stamped with a fresh id and its timestamp
    pub fn new(module_id: impl Into<String>, answers: AnswerSet, report: Report) -> Self {
        let id = RecordId::new();
        Self {
            id,
            module_id: module_id.into(),
            answers,
            report,
            created_at: id.timestamp(),
        }
    }
}
