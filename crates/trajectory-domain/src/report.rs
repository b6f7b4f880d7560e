//! Assessment engines and their reports
//!
//! Each engine bundles a [`ScoringProfile`] with the recommendation tables of
//! its variant. `standard()` builds the engine from the built-in tables; the
//! fields are public so callers can assemble engines from loaded tables.

use crate::confidence::behavioral_confidence;
use crate::recommend::{action_plan, growth_potential, lane_next_steps};
use crate::session::{answers_from_events, badges};
use crate::tables::{self, LaneDescription};
use crate::{
    ActionPlan, ActionTable, AnswerSet, Avatar, Badge, BadgePolicy, BehavioralPolicy, Classifier,
    Composite, ConfigDefect, GameEvent, GameSession, GrowthPotential, Label, LaneCategory, Lane,
    LifeDomain, ScoreCard, ScoreLabel, ScoringProfile, SessionSummary, TieBreakOrder,
};

/// Life assessment engine (six domains, avatar bands)
#[derive(Debug, Clone, PartialEq)]
pub struct LifeAssessment {
    /// Scoring pipeline
    pub profile: ScoringProfile<LifeDomain, Avatar>,
    /// Action texts per domain
    pub actions: ActionTable<LifeDomain>,
}

/// Result of the life assessment
#[derive(Debug, Clone, PartialEq)]
pub struct LifeReport {
    /// Scores, avatar and confidence
    pub card: ScoreCard<LifeDomain, Avatar>,
    /// The two weakest domains, weakest first
    pub lowest_two: [LifeDomain; 2],
    /// Seven-day and thirty-day plan for the weakest domains
    pub actions: ActionPlan,
    /// Grade of every domain score
    pub domain_labels: Vec<(LifeDomain, ScoreLabel)>,
}

impl LifeAssessment {
    /// Engine over the built-in tables
    pub fn standard() -> Result<Self, ConfigDefect> {
        Ok(Self {
            profile: ScoringProfile {
                name: "life".to_string(),
                question_map: tables::life_question_map(),
                composite: Composite::Mean,
                classifier: Classifier::bands_only(tables::avatar_bands()?),
                tie_break: TieBreakOrder::default(),
            },
            actions: tables::life_actions()?,
        })
    }

    /// Score one submission
    pub fn assess(&self, answers: &AnswerSet) -> LifeReport {
        let card = self.profile.score(answers);
        // ranking always holds all six domains
        let lowest_two = [card.ranking[0], card.ranking[1]];
        let actions = action_plan(lowest_two[0], lowest_two[1], &self.actions);
        let domain_labels = card
            .category_scores
            .iter()
            .map(|(domain, score)| (domain, ScoreLabel::for_score(score)))
            .collect();

        LifeReport {
            card,
            lowest_two,
            actions,
            domain_labels,
        }
    }
}

/// Lane diagnostic engine (weighted categories, override rules)
#[derive(Debug, Clone, PartialEq)]
pub struct LaneDiagnostic {
    /// Scoring pipeline
    pub profile: ScoringProfile<LaneCategory, Lane>,
}

/// Result of the lane diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct LaneReport {
    /// Scores, lane and confidence
    pub card: ScoreCard<LaneCategory, Lane>,
    /// Growth potential from risk, systems and time scores
    pub growth_potential: GrowthPotential,
    /// Up to five next steps
    pub next_steps: Vec<String>,
    /// Static description of the assigned lane
    pub description: &'static LaneDescription,
}

impl LaneDiagnostic {
    /// Engine over the built-in tables
    pub fn standard() -> Result<Self, ConfigDefect> {
        Ok(Self {
            profile: ScoringProfile {
                name: "lane-diagnostic".to_string(),
                question_map: tables::lane_question_map(),
                composite: Composite::Weighted(tables::lane_weights()?),
                classifier: tables::lane_diagnostic_classifier()?,
                tie_break: TieBreakOrder::default(),
            },
        })
    }

    /// Score one submission
    pub fn assess(&self, answers: &AnswerSet) -> LaneReport {
        let card = self.profile.score(answers);
        let lane = card.label();
        let weakest = card.weakest().unwrap_or(LaneCategory::FinancialMindset);

        LaneReport {
            growth_potential: growth_potential(&card.category_scores),
            next_steps: lane_next_steps(lane, weakest),
            description: tables::lane_description(lane),
            card,
        }
    }
}

/// Lane game engine (unweighted lane categories, behavioral confidence)
#[derive(Debug, Clone, PartialEq)]
pub struct LaneGame {
    /// Scoring pipeline
    pub profile: ScoringProfile<LaneCategory, Lane>,
    /// Behavioral confidence ledger
    pub confidence_policy: BehavioralPolicy,
    /// Badge thresholds
    pub badge_policy: BadgePolicy,
}

/// Result of one lane game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    /// Scores and lane
    pub card: ScoreCard<LaneCategory, Lane>,
    /// Behavioral confidence in 0..=100
    pub confidence: u8,
    /// Earned badges
    pub badges: Vec<Badge>,
    /// Three next steps for the lane
    pub next_steps: Vec<String>,
}

impl GameReport {
    /// Assigned lane
    pub fn lane(&self) -> Lane {
        self.card.label()
    }
}

impl LaneGame {
    /// Engine over the built-in tables
    pub fn standard() -> Result<Self, ConfigDefect> {
        Ok(Self {
            profile: ScoringProfile {
                name: "lane-game".to_string(),
                question_map: tables::lane_question_map(),
                composite: Composite::Mean,
                classifier: Classifier::bands_only(tables::lane_game_bands()?),
                tie_break: TieBreakOrder::default(),
            },
            confidence_policy: BehavioralPolicy::default(),
            badge_policy: BadgePolicy::default(),
        })
    }

    /// Score a session from its answer events
    pub fn assess(&self, session: &GameSession, events: &[GameEvent]) -> GameReport {
        let answers = answers_from_events(events);
        let summary = SessionSummary::from_session(session, events);
        self.assess_summary(&answers, &summary)
    }

    /// Score answers with an already derived session summary
    pub fn assess_summary(&self, answers: &AnswerSet, summary: &SessionSummary) -> GameReport {
        let card = self.profile.score(answers);
        let next_steps = tables::game_steps(card.label())
            .iter()
            .map(|s| s.to_string())
            .collect();

        GameReport {
            confidence: behavioral_confidence(&summary.confidence_factors(), &self.confidence_policy),
            badges: badges(summary, &self.badge_policy),
            next_steps,
            card,
        }
    }
}

/// Report of any variant
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Life assessment
    Life(LifeReport),
    /// Lane diagnostic
    Lane(LaneReport),
    /// Lane game
    Game(GameReport),
}

impl Report {
    /// Variant name
    pub fn kind(&self) -> &'static str {
        match self {
            Report::Life(_) => "life",
            Report::Lane(_) => "lane-diagnostic",
            Report::Game(_) => "lane-game",
        }
    }

    /// Wire name of the assigned label
    pub fn label(&self) -> &'static str {
        match self {
            Report::Life(r) => r.card.label().as_str(),
            Report::Lane(r) => r.card.label().as_str(),
            Report::Game(r) => r.card.label().as_str(),
        }
    }

    /// Overall score
    pub fn overall(&self) -> f64 {
        match self {
            Report::Life(r) => r.card.overall,
            Report::Lane(r) => r.card.overall,
            Report::Game(r) => r.card.overall,
        }
    }
}
