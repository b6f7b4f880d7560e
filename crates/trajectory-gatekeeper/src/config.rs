//! Gatekeeper configuration

/// Configuration for intake rules
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Lowest accepted answer value
    pub min_answer: i64,

    /// Highest accepted answer value
    pub max_answer: i64,

    /// Reject submissions that skip a mapped question
    pub require_complete: bool,

    /// Reject answers to question ids the question map does not know
    pub reject_unknown_questions: bool,

    /// Scored questions a question bank must contain
    pub expected_scored: usize,

    /// Reflective questions a question bank must contain
    pub expected_reflective: usize,

    /// Reject question banks whose prompts still hold placeholder text
    pub reject_placeholders: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            min_answer: 1,
            max_answer: 5,
            require_complete: false,
            reject_unknown_questions: false,
            expected_scored: 15,
            expected_reflective: 2,
            reject_placeholders: true,
        }
    }
}

impl IntakeConfig {
    /// Create a permissive configuration (range checks only)
    pub fn permissive() -> Self {
        Self {
            reject_placeholders: false,
            ..Self::default()
        }
    }

    /// Create a strict configuration (all validations enabled)
    pub fn strict() -> Self {
        Self {
            require_complete: true,
            reject_unknown_questions: true,
            ..Self::default()
        }
    }

    /// Same rules with different question bank counts
    pub fn with_bank_counts(mut self, scored: usize, reflective: usize) -> Self {
        self.expected_scored = scored;
        self.expected_reflective = reflective;
        self
    }
}
