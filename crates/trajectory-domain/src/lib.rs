//! Trajectory Domain Layer
//!
//! Pure scoring and classification logic for the Trajectory assessments.
//! Nothing in this crate performs I/O or holds mutable shared state: every
//! operation is a deterministic function of its input and of immutable
//! configuration tables, so it can be called concurrently without locks.
//!
//! ## Pipeline
//!
//! - **Aggregator**: raw answers -> per-category means ([`aggregate`])
//! - **Composite scorer**: category means -> overall score ([`Composite`])
//! - **Classifier**: overall + category signals -> label ([`Classifier`])
//! - **Recommendation & confidence**: weakest categories, confidence,
//!   action plans and badges ([`lowest_n`], [`confidence`], [`recommend`],
//!   [`session`])
//!
//! ## Variants
//!
//! - [`LifeAssessment`]: six life domains, Drifter / Balancer / Architect
//! - [`LaneDiagnostic`]: four weighted lane categories with override rules
//! - [`LaneGame`]: the timed lane game with behavioral confidence and badges

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod answers;
pub mod category;
pub mod classify;
pub mod composite;
pub mod confidence;
pub mod error;
pub mod label;
pub mod profile;
pub mod ranking;
pub mod recommend;
pub mod record;
pub mod report;
pub mod scores;
pub mod session;
pub mod tables;
pub mod traits;

// Re-exports for convenience
pub use aggregate::aggregate;
pub use answers::{AnswerSet, QuestionMap};
pub use category::{Category, LaneCategory, LifeDomain};
pub use classify::{Band, BandTable, Classification, Classifier, Condition, OverrideRule, Threshold};
pub use composite::{Composite, WeightTable};
pub use confidence::{BehavioralPolicy, ConfidenceFactors};
pub use error::ConfigDefect;
pub use label::{Avatar, GrowthPotential, Label, Lane, ScoreLabel};
pub use profile::{ScoreCard, ScoringProfile};
pub use ranking::{lowest_n, TieBreakOrder};
pub use recommend::{ActionPlan, ActionSet, ActionTable};
pub use record::{RecordId, ResultRecord};
pub use report::{GameReport, LaneDiagnostic, LaneGame, LaneReport, LifeAssessment, LifeReport, Report};
pub use scores::{round2, CategoryScores};
pub use session::{Badge, BadgePolicy, GameEvent, GameSession, SessionSummary};
pub use traits::ResultStore;
