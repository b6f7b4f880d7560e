//! Input documents read by the commands.
//!
//! Submissions are JSON objects mapping question ids to values, either bare
//! (`{"Q1": 4}`) or wrapped with optional reflective answers
//! (`{"answers": {"Q1": 4}, "reflective": {"R1": "..."}}`). Game sessions
//! hold the session and its ordered answer events.

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use trajectory_domain::{GameEvent, GameSession};

/// A questionnaire submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Submission {
    /// Answers plus free-text reflections
    Wrapped {
        /// Raw answers
        answers: BTreeMap<String, i64>,
        /// Reflective answers, never scored
        #[serde(default)]
        reflective: BTreeMap<String, String>,
    },
    /// Bare answer map
    Plain(BTreeMap<String, i64>),
}

impl Submission {
    /// Raw answers of the submission.
    pub fn answers(&self) -> &BTreeMap<String, i64> {
        match self {
            Submission::Wrapped { answers, .. } => answers,
            Submission::Plain(answers) => answers,
        }
    }
}

/// A lane game session file.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFile {
    /// Session metadata
    pub session: SessionEntry,
    /// Answer events in presentation order
    #[serde(default)]
    pub events: Vec<EventEntry>,
}

/// Session metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionEntry {
    /// Session id
    pub id: String,
    /// Start, milliseconds since the Unix epoch
    pub started_at: u64,
    /// Completion, milliseconds since the Unix epoch
    #[serde(default)]
    pub completed_at: Option<u64>,
    /// Presented question order
    #[serde(default)]
    pub question_order: Vec<String>,
    /// Validation consistency [0, 1]
    pub consistency_score: f64,
    /// Mean time to answer, in milliseconds
    pub avg_answer_ms: f64,
    /// Timed-out questions
    #[serde(default)]
    pub timeouts: u32,
}

/// One answer event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntry {
    /// Question id
    pub question_id: String,
    /// Position in the session
    pub q_index: usize,
    /// Answer on the 1-5 scale
    #[serde(default)]
    pub answer: Option<u8>,
    /// Time spent on the question
    #[serde(default)]
    pub duration_ms: u64,
    /// Whether the timer ran out
    #[serde(default)]
    pub timed_out: bool,
    /// Whether the answer was revised
    #[serde(default)]
    pub changed_answer: bool,
}

impl SessionFile {
    /// Domain session and events.
    pub fn into_domain(self) -> (GameSession, Vec<GameEvent>) {
        let session = GameSession {
            id: self.session.id,
            started_at: self.session.started_at,
            completed_at: self.session.completed_at,
            question_order: self.session.question_order,
            consistency_score: self.session.consistency_score,
            avg_answer_ms: self.session.avg_answer_ms,
            timeouts: self.session.timeouts,
        };
        let events = self
            .events
            .into_iter()
            .map(|e| GameEvent {
                question_id: e.question_id,
                q_index: e.q_index,
                answer: e.answer,
                duration_ms: e.duration_ms,
                timed_out: e.timed_out,
                changed_answer: e.changed_answer,
            })
            .collect();
        (session, events)
    }
}

/// Read a file, or stdin when the path is `-`.
pub fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Read and parse a JSON document from a file or stdin.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let text = read_source(path)?;
    Ok(serde_json::from_str(&text)?)
}
