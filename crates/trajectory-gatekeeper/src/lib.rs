//! Trajectory Gatekeeper
//!
//! Boundary validation in front of the scoring core. The core trusts its
//! input; everything arriving from outside passes through here first.
//!
//! The Gatekeeper provides:
//! - Answer validation (1-5 range, completeness, unknown question ids)
//! - Question bank validation (counts, allowed domains, placeholder text)
//! - Game session validation (answer range, consistency, answer timing)
//! - Question maps built from validated banks
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use trajectory_domain::tables;
//! use trajectory_gatekeeper::{Gatekeeper, IntakeConfig};
//!
//! let gatekeeper = Gatekeeper::new(IntakeConfig::default());
//! let mut raw = BTreeMap::new();
//! raw.insert("Q1".to_string(), 4);
//!
//! let answers = gatekeeper.accept(&raw, &tables::life_question_map()).unwrap();
//! assert_eq!(answers.get("Q1"), Some(4));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod question_bank;
mod validator;

pub use config::IntakeConfig;
pub use error::GatekeeperError;
pub use question_bank::{BankIssue, BankMetadata, Question, QuestionBank};
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};
