//! Lane game sessions: answer events, session summaries and badges

use crate::confidence::ConfidenceFactors;
use crate::AnswerSet;

/// One timed lane game run
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    /// Session identifier
    pub id: String,
    /// Start time, milliseconds since the Unix epoch
    pub started_at: u64,
    /// Completion time, absent while the run is still open
    pub completed_at: Option<u64>,
    /// Question ids in the order they were presented
    pub question_order: Vec<String>,
    /// Agreement with the validation questions [0, 1]
    pub consistency_score: f64,
    /// Mean time to answer, in milliseconds
    pub avg_answer_ms: f64,
    /// Number of timed-out questions
    pub timeouts: u32,
}

/// A single answer (or timeout) within a session
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    /// Question answered
    pub question_id: String,
    /// Position of the question in the session order
    pub q_index: usize,
    /// Answer on the 1-5 scale; absent on timeout
    pub answer: Option<u8>,
    /// Time spent on the question
    pub duration_ms: u64,
    /// Whether the timer ran out
    pub timed_out: bool,
    /// Whether the player revised a previous answer
    pub changed_answer: bool,
}

/// Number of trailing answers inspected for the closing badge
pub const CLOSING_WINDOW: usize = 3;

/// Behavioral facts of a session, the input of confidence and badges
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// The session carries a completion timestamp
    pub completed: bool,
    /// Mean time to answer, in milliseconds
    pub avg_answer_ms: f64,
    /// Events flagged as revised answers
    pub answer_changes: u32,
    /// Timed-out questions
    pub timeouts: u32,
    /// Agreement with the validation questions [0, 1]
    pub validation_consistency: f64,
    /// Answers of the last [`CLOSING_WINDOW`] events, oldest first
    pub closing_answers: Vec<Option<u8>>,
}

impl SessionSummary {
    /// Fold a session and its events into a summary
    pub fn from_session(session: &GameSession, events: &[GameEvent]) -> Self {
        let answer_changes = events.iter().filter(|e| e.changed_answer).count() as u32;
        let start = events.len().saturating_sub(CLOSING_WINDOW);
        Self {
            completed: session.completed_at.is_some(),
            avg_answer_ms: session.avg_answer_ms,
            answer_changes,
            timeouts: session.timeouts,
            validation_consistency: session.consistency_score,
            closing_answers: events[start..].iter().map(|e| e.answer).collect(),
        }
    }

    /// Factors of the behavioral confidence ledger
    pub fn confidence_factors(&self) -> ConfidenceFactors {
        ConfidenceFactors {
            avg_answer_ms: self.avg_answer_ms,
            answer_changes: self.answer_changes,
            timeouts: self.timeouts,
            validation_consistency: self.validation_consistency,
        }
    }

    /// Mean of the closing answers over a fixed window; missing answers count 0
    pub fn closing_mean(&self) -> f64 {
        let sum: u32 = self
            .closing_answers
            .iter()
            .map(|a| u32::from(a.unwrap_or(0)))
            .sum();
        f64::from(sum) / CLOSING_WINDOW as f64
    }
}

/// Answers of a session; a later event for the same question replaces an
/// earlier one, timeouts contribute nothing
pub fn answers_from_events(events: &[GameEvent]) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for event in events {
        if let Some(value) = event.answer {
            answers.insert(event.question_id.clone(), value);
        }
    }
    answers
}

/// Achievement earned in a lane game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Badge {
    /// Finished a run
    SkyPilot,
    /// Answered quickly without second-guessing
    FirstInstinct,
    /// No timeouts
    SteadyClimb,
    /// Consistent with the validation questions
    HonestSignal,
    /// Strong last answers
    Closer90,
}

impl Badge {
    /// Every badge, in award order
    pub const ALL: &'static [Badge] = &[
        Badge::SkyPilot,
        Badge::FirstInstinct,
        Badge::SteadyClimb,
        Badge::HonestSignal,
        Badge::Closer90,
    ];

    /// Stable badge code
    pub fn code(&self) -> &'static str {
        match self {
            Badge::SkyPilot => "SKY_PILOT",
            Badge::FirstInstinct => "FIRST_INSTINCT",
            Badge::SteadyClimb => "STEADY_CLIMB",
            Badge::HonestSignal => "HONEST_SIGNAL",
            Badge::Closer90 => "CLOSER_90",
        }
    }

    /// Parse a badge code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.code() == code)
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Thresholds of the badge predicates
#[derive(Debug, Clone, PartialEq)]
pub struct BadgePolicy {
    /// Mean latency strictly below this qualifies for `FIRST_INSTINCT`
    pub first_instinct_ms: f64,
    /// Revisions at most this qualify for `FIRST_INSTINCT`
    pub first_instinct_max_changes: u32,
    /// Consistency at or above this earns `HONEST_SIGNAL`
    pub honest_signal_min: f64,
    /// Closing mean at or above this earns `CLOSER_90`
    pub closer_min: f64,
}

impl Default for BadgePolicy {
    fn default() -> Self {
        Self {
            first_instinct_ms: 8000.0,
            first_instinct_max_changes: 2,
            honest_signal_min: 0.8,
            closer_min: 4.0,
        }
    }
}

/// Badges earned by a session; every predicate is evaluated independently
pub fn badges(summary: &SessionSummary, policy: &BadgePolicy) -> Vec<Badge> {
    Badge::ALL
        .iter()
        .copied()
        .filter(|badge| match badge {
            Badge::SkyPilot => summary.completed,
            Badge::FirstInstinct => {
                summary.avg_answer_ms < policy.first_instinct_ms
                    && summary.answer_changes <= policy.first_instinct_max_changes
            }
            Badge::SteadyClimb => summary.timeouts == 0,
            Badge::HonestSignal => summary.validation_consistency >= policy.honest_signal_min,
            Badge::Closer90 => summary.closing_mean() >= policy.closer_min,
        })
        .collect()
}

/// Combined question order with validation questions placed at the 25% and
/// 75% positions
///
/// `main` is expected to be shuffled already. Every id of both lists appears
/// exactly once: validation ids beyond the two slots go to the end, and a
/// slot with no validation id left takes the next main question.
pub fn interleave_validation(main: &[String], validation: &[String]) -> Vec<String> {
    let total = main.len() + validation.len();
    let slots = [total / 4, total * 3 / 4];

    let mut main_iter = main.iter();
    let mut validation_iter = validation.iter();
    let mut order = Vec::with_capacity(total);

    for position in 0..total {
        let next = if slots.contains(&position) {
            validation_iter.next().or_else(|| main_iter.next())
        } else {
            main_iter.next().or_else(|| validation_iter.next())
        };
        if let Some(id) = next {
            order.push(id.clone());
        }
    }
    order
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: interleaving keeps every id exactly once
        #[test]
        fn test_interleave_is_a_permutation(main_len in 0usize..40, validation_len in 0usize..6) {
            let main: Vec<String> = (0..main_len).map(|i| format!("M{}", i)).collect();
            let validation: Vec<String> = (0..validation_len).map(|i| format!("V{}", i)).collect();

            let mut order = interleave_validation(&main, &validation);
            prop_assert_eq!(order.len(), main_len + validation_len);

            let mut expected: Vec<String> = main.iter().chain(validation.iter()).cloned().collect();
            order.sort();
            expected.sort();
            prop_assert_eq!(order, expected);
        }
    }
}
