//! Answer and question bank validation logic

use crate::question_bank::{Question, QuestionBank, PLACEHOLDERS};
use crate::{BankIssue, GatekeeperError, IntakeConfig};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use trajectory_domain::{AnswerSet, Category, GameEvent, GameSession, QuestionMap};

/// Result of answer validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the submission passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,

    /// Share of mapped questions answered with a valid value (0.0-1.0)
    pub completeness: f64,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Submission accepted
    Accepted,

    /// Submission rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Answer outside the accepted scale
    OutOfRange {
        /// Question answered
        question_id: String,
        /// Submitted value
        value: i64,
        /// Lowest accepted value
        min: i64,
        /// Highest accepted value
        max: i64,
    },

    /// Mapped question without an answer
    MissingAnswer {
        /// Question skipped
        question_id: String,
    },

    /// Answer to a question the map does not know
    UnknownQuestion {
        /// Question answered
        question_id: String,
    },

    /// Session validation consistency outside [0, 1]
    InvalidConsistency {
        /// Submitted consistency
        value: f64,
    },

    /// Session mean answer time negative or not a number
    InvalidLatency {
        /// Submitted mean, in milliseconds
        value: f64,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::OutOfRange {
                question_id,
                value,
                min,
                max,
            } => write!(f, "{}: value {} is outside [{}, {}]", question_id, value, min, max),
            RejectionReason::MissingAnswer { question_id } => {
                write!(f, "{}: no answer", question_id)
            }
            RejectionReason::UnknownQuestion { question_id } => {
                write!(f, "{}: unknown question", question_id)
            }
            RejectionReason::InvalidConsistency { value } => {
                write!(f, "consistency_score: value {} is outside [0, 1]", value)
            }
            RejectionReason::InvalidLatency { value } => {
                write!(f, "avg_answer_ms: value {} is not a non-negative number", value)
            }
        }
    }
}

/// The Gatekeeper validates submissions and question banks before scoring
pub struct Gatekeeper {
    config: IntakeConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(IntakeConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Validate raw answers against the configured rules
    ///
    /// Every violation is collected; the status is `Rejected` when at least
    /// one reason was found.
    pub fn validate_answers<C: Category>(
        &self,
        raw: &BTreeMap<String, i64>,
        question_map: &QuestionMap<C>,
    ) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Range
        for (question_id, value) in raw {
            if !self.in_range(*value) {
                reasons.push(self.out_of_range(question_id, *value));
            }
        }

        // 2. Unknown ids
        if self.config.reject_unknown_questions {
            for question_id in raw.keys() {
                if question_map.category_of(question_id).is_none() {
                    reasons.push(RejectionReason::UnknownQuestion {
                        question_id: question_id.clone(),
                    });
                }
            }
        }

        // 3. Completeness
        let mut answered = 0usize;
        for (question_id, _) in question_map.iter() {
            match raw.get(question_id) {
                Some(value) if self.in_range(*value) => answered += 1,
                Some(_) => {}
                None if self.config.require_complete => {
                    reasons.push(RejectionReason::MissingAnswer {
                        question_id: question_id.to_string(),
                    });
                }
                None => {}
            }
        }
        let completeness = if question_map.is_empty() {
            0.0
        } else {
            answered as f64 / question_map.len() as f64
        };

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            tracing::warn!(reasons = reasons.len(), "submission rejected");
            ValidationStatus::Rejected
        };

        ValidationResult {
            status,
            reasons,
            completeness,
        }
    }

    /// Validate and convert raw answers into an [`AnswerSet`]
    pub fn accept<C: Category>(
        &self,
        raw: &BTreeMap<String, i64>,
        question_map: &QuestionMap<C>,
    ) -> Result<AnswerSet, GatekeeperError> {
        let result = self.validate_answers(raw, question_map);
        if result.status == ValidationStatus::Rejected {
            return Err(GatekeeperError::Rejected {
                reasons: result.reasons,
            });
        }

        let mut answers = AnswerSet::new();
        for (question_id, value) in raw {
            let converted = u8::try_from(*value).map_err(|_| GatekeeperError::Rejected {
                reasons: vec![self.out_of_range(question_id, *value)],
            })?;
            answers.insert(question_id.clone(), converted);
        }
        tracing::debug!(
            answers = answers.len(),
            completeness = result.completeness,
            "submission accepted"
        );
        Ok(answers)
    }

    /// Validate a lane game session and its answer events
    ///
    /// Every answered event must lie on the answer scale, the session's
    /// consistency within [0, 1] and its mean answer time a non-negative
    /// number. Completeness is the share of events carrying a valid answer.
    pub fn validate_session(&self, session: &GameSession, events: &[GameEvent]) -> ValidationResult {
        let mut reasons = Vec::new();

        let mut answered = 0usize;
        for event in events {
            if let Some(answer) = event.answer {
                if self.in_range(i64::from(answer)) {
                    answered += 1;
                } else {
                    reasons.push(self.out_of_range(&event.question_id, i64::from(answer)));
                }
            }
        }

        if !(0.0..=1.0).contains(&session.consistency_score) {
            reasons.push(RejectionReason::InvalidConsistency {
                value: session.consistency_score,
            });
        }
        if !session.avg_answer_ms.is_finite() || session.avg_answer_ms < 0.0 {
            reasons.push(RejectionReason::InvalidLatency {
                value: session.avg_answer_ms,
            });
        }

        let completeness = if events.is_empty() {
            0.0
        } else {
            answered as f64 / events.len() as f64
        };

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            tracing::warn!(session = %session.id, reasons = reasons.len(), "session rejected");
            ValidationStatus::Rejected
        };

        ValidationResult {
            status,
            reasons,
            completeness,
        }
    }

    /// Validate a session, failing with every reason found
    pub fn accept_session(&self, session: &GameSession, events: &[GameEvent]) -> Result<(), GatekeeperError> {
        let result = self.validate_session(session, events);
        if result.status == ValidationStatus::Rejected {
            return Err(GatekeeperError::Rejected {
                reasons: result.reasons,
            });
        }
        tracing::debug!(events = events.len(), completeness = result.completeness, "session accepted");
        Ok(())
    }

    /// Validate a question bank whose scored questions use categories `C`
    ///
    /// Returns every issue found; an empty list means the bank is valid.
    pub fn validate_question_bank<C: Category>(&self, bank: &QuestionBank) -> Vec<BankIssue> {
        let mut issues = Vec::new();

        if bank
            .metadata
            .as_ref()
            .and_then(|m| m.domains.as_ref())
            .is_none()
        {
            issues.push(BankIssue::MissingDomains);
        }

        if bank.scored.len() != self.config.expected_scored {
            issues.push(BankIssue::ScoredCount {
                expected: self.config.expected_scored,
                found: bank.scored.len(),
            });
        }
        for (index, question) in bank.scored.iter().enumerate() {
            match question.domain.as_deref() {
                None | Some("") => issues.push(BankIssue::MissingDomain { index }),
                Some(domain) if C::parse(domain).is_none() => issues.push(BankIssue::DisallowedDomain {
                    index,
                    domain: domain.to_string(),
                }),
                Some(_) => {}
            }
            self.check_question("scored", index, question, &mut issues);
        }

        if bank.reflective.len() != self.config.expected_reflective {
            issues.push(BankIssue::ReflectiveCount {
                expected: self.config.expected_reflective,
                found: bank.reflective.len(),
            });
        }
        for (index, question) in bank.reflective.iter().enumerate() {
            self.check_question("reflective", index, question, &mut issues);
        }

        let mut seen = BTreeSet::new();
        for id in bank.all_questions().filter_map(|q| q.id.as_deref()) {
            if !id.is_empty() && !seen.insert(id) {
                issues.push(BankIssue::DuplicateId { id: id.to_string() });
            }
        }

        if !issues.is_empty() {
            tracing::warn!(issues = issues.len(), "question bank invalid");
        }
        issues
    }

    /// Validate a bank and build its question map in one step
    pub fn accept_question_bank<C: Category>(
        &self,
        bank: &QuestionBank,
    ) -> Result<QuestionMap<C>, GatekeeperError> {
        let issues = self.validate_question_bank::<C>(bank);
        if !issues.is_empty() {
            return Err(GatekeeperError::InvalidBank { issues });
        }
        bank.question_map()
    }

    fn check_question(
        &self,
        section: &'static str,
        index: usize,
        question: &Question,
        issues: &mut Vec<BankIssue>,
    ) {
        if question.id.as_deref().map_or(true, str::is_empty) {
            issues.push(BankIssue::MissingId { section, index });
        }
        let prompt = question.prompt.as_deref().unwrap_or("");
        if prompt.trim().is_empty() {
            issues.push(BankIssue::EmptyPrompt { section, index });
        }
        if self.config.reject_placeholders && PLACEHOLDERS.iter().any(|p| prompt.contains(p)) {
            issues.push(BankIssue::Placeholder { section, index });
        }
    }

    /// Configured answer scale, narrowed to what an answer byte can hold
    fn bounds(&self) -> (i64, i64) {
        (
            self.config.min_answer.max(i64::from(u8::MIN)),
            self.config.max_answer.min(i64::from(u8::MAX)),
        )
    }

    fn in_range(&self, value: i64) -> bool {
        let (min, max) = self.bounds();
        value >= min && value <= max
    }

    fn out_of_range(&self, question_id: &str, value: i64) -> RejectionReason {
        let (min, max) = self.bounds();
        RejectionReason::OutOfRange {
            question_id: question_id.to_string(),
            value,
            min,
            max,
        }
    }
}
