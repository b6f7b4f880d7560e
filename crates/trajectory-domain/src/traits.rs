//! Trait definitions for external interactions
//!
//! Boundaries between scoring and infrastructure. Implementations live in
//! other crates.

use crate::{RecordId, ResultRecord};

/// Persistence of scored submissions
///
/// Implemented by the infrastructure layer (the CLI's JSON Lines store).
pub trait ResultStore {
    /// Error type for store operations
    type Error;

    /// Persist a record and return its id
    fn persist(&mut self, record: &ResultRecord) -> Result<RecordId, Self::Error>;
}
