//! Question bank files
//!
//! A bank is the JSON document listing the scored and reflective questions
//! of an assessment:
//!
//! ```json
//! {
//!   "metadata": { "note": "...", "domains": ["identity", "health"] },
//!   "scored": [{ "id": "Q1", "domain": "identity", "prompt": "..." }],
//!   "reflective": [{ "id": "R1", "prompt": "..." }]
//! }
//! ```
//!
//! Every field is optional at parse time so that validation can report what
//! is missing instead of failing on the first absent key.

use crate::GatekeeperError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use trajectory_domain::{Category, QuestionMap};

/// Prompt fragments left behind by unfinished content
pub const PLACEHOLDERS: &[&str] = &["<<<VERBATIM FROM DOCS>>>", "TBD – paste verbatim from docs"];

/// Bank metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankMetadata {
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
    /// Domains the bank covers
    #[serde(default)]
    pub domains: Option<Vec<String>>,
}

/// A question of the bank
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Question {
    /// Question id, the key of submitted answers
    #[serde(default)]
    pub id: Option<String>,
    /// Category name (scored questions only)
    #[serde(default)]
    pub domain: Option<String>,
    /// Text shown to the respondent
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Parsed question bank
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionBank {
    /// Bank metadata
    #[serde(default)]
    pub metadata: Option<BankMetadata>,
    /// Questions answered on the 1-5 scale
    #[serde(default)]
    pub scored: Vec<Question>,
    /// Free-text questions, never scored
    #[serde(default)]
    pub reflective: Vec<Question>,
}

impl QuestionBank {
    /// Parse a bank from JSON text
    pub fn from_json(text: &str) -> Result<Self, GatekeeperError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a bank file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GatekeeperError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Scored questions followed by reflective ones
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.scored.iter().chain(self.reflective.iter())
    }

    /// Question map of the scored questions
    ///
    /// Questions lacking an id or domain are skipped; a domain outside the
    /// enumeration is a configuration error.
    pub fn question_map<C: Category>(&self) -> Result<QuestionMap<C>, GatekeeperError> {
        let entries = self
            .scored
            .iter()
            .filter_map(|q| Some((q.id.clone()?, q.domain.clone()?)));
        Ok(QuestionMap::from_names(entries)?)
    }
}

/// A problem found in a question bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankIssue {
    /// `metadata.domains` is absent
    MissingDomains,
    /// Wrong number of scored questions
    ScoredCount {
        /// Required count
        expected: usize,
        /// Actual count
        found: usize,
    },
    /// Wrong number of reflective questions
    ReflectiveCount {
        /// Required count
        expected: usize,
        /// Actual count
        found: usize,
    },
    /// Question without an id
    MissingId {
        /// `scored` or `reflective`
        section: &'static str,
        /// Position in the section
        index: usize,
    },
    /// Scored question without a domain
    MissingDomain {
        /// Position in the scored section
        index: usize,
    },
    /// Scored question with a domain outside the enumeration
    DisallowedDomain {
        /// Position in the scored section
        index: usize,
        /// Offending domain
        domain: String,
    },
    /// Question with an empty prompt
    EmptyPrompt {
        /// `scored` or `reflective`
        section: &'static str,
        /// Position in the section
        index: usize,
    },
    /// Prompt still holds placeholder text
    Placeholder {
        /// `scored` or `reflective`
        section: &'static str,
        /// Position in the section
        index: usize,
    },
    /// The same id appears twice
    DuplicateId {
        /// Repeated id
        id: String,
    },
}

impl fmt::Display for BankIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankIssue::MissingDomains => write!(f, "Missing or invalid metadata.domains array"),
            BankIssue::ScoredCount { expected, found } => {
                write!(f, "Expected {} scored questions, found {}", expected, found)
            }
            BankIssue::ReflectiveCount { expected, found } => {
                write!(f, "Expected {} reflective questions, found {}", expected, found)
            }
            BankIssue::MissingId { section, index } => {
                write!(f, "{}[{}]: missing or invalid id", section, index)
            }
            BankIssue::MissingDomain { index } => {
                write!(f, "scored[{}]: missing or invalid domain", index)
            }
            BankIssue::DisallowedDomain { index, domain } => {
                write!(f, "scored[{}]: domain \"{}\" not in allowed list", index, domain)
            }
            BankIssue::EmptyPrompt { section, index } => {
                write!(f, "{}[{}]: missing or empty prompt", section, index)
            }
            BankIssue::Placeholder { section, index } => {
                write!(f, "{}[{}]: prompt still contains placeholder text", section, index)
            }
            BankIssue::DuplicateId { id } => write!(f, "duplicate question id \"{}\"", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory_domain::LifeDomain;

    #[test]
    fn test_parse_partial_document() {
        let bank = QuestionBank::from_json(r#"{ "scored": [{ "id": "Q1" }] }"#).unwrap();
        assert!(bank.metadata.is_none());
        assert_eq!(bank.scored.len(), 1);
        assert!(bank.scored[0].domain.is_none());
        assert!(bank.reflective.is_empty());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            QuestionBank::from_json("{ not json"),
            Err(GatekeeperError::Parse(_))
        ));
    }

    #[test]
    fn test_question_map_from_bank() {
        let bank = QuestionBank::from_json(
            r#"{ "scored": [
                { "id": "Q1", "domain": "identity", "prompt": "a" },
                { "id": "Q2", "domain": "Focus", "prompt": "b" },
                { "id": "Q3", "prompt": "c" }
            ] }"#,
        )
        .unwrap();
        let map = bank.question_map::<LifeDomain>().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.category_of("Q2"), Some(LifeDomain::Focus));
    }

    #[test]
    fn test_question_map_unknown_domain() {
        let bank = QuestionBank::from_json(r#"{ "scored": [{ "id": "Q1", "domain": "career" }] }"#).unwrap();
        assert!(matches!(
            bank.question_map::<LifeDomain>(),
            Err(GatekeeperError::Config(_))
        ));
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            BankIssue::ScoredCount { expected: 15, found: 14 }.to_string(),
            "Expected 15 scored questions, found 14"
        );
        assert_eq!(
            BankIssue::Placeholder { section: "reflective", index: 1 }.to_string(),
            "reflective[1]: prompt still contains placeholder text"
        );
    }
}
