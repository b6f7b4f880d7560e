//! Gatekeeper error types

use crate::{BankIssue, RejectionReason};
use thiserror::Error;
use trajectory_domain::ConfigDefect;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Submission failed intake validation
    #[error("Submission rejected: {} reason(s)", .reasons.len())]
    Rejected {
        /// Every reason found
        reasons: Vec<RejectionReason>,
    },

    /// Question bank failed validation
    #[error("Invalid question bank: {} issue(s)", .issues.len())]
    InvalidBank {
        /// Every issue found
        issues: Vec<BankIssue>,
    },

    /// Question bank file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Question bank is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Question bank maps onto an invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigDefect),
}
