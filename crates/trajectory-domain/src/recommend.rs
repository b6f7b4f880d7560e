//! Recommendations: action plans, next steps, growth potential, roadmaps

use crate::{tables, Category, CategoryScores, ConfigDefect, GrowthPotential, LaneCategory, Lane};
use std::collections::BTreeMap;

/// Short-term actions taken from the weakest category
pub const PRIMARY_ACTIONS: usize = 2;

/// Short-term actions taken from the second weakest category
pub const SECONDARY_ACTIONS: usize = 1;

/// Upper bound on lane diagnostic next steps
pub const MAX_NEXT_STEPS: usize = 5;

/// Mean of recent answers at or above which the "high" insight is shown
pub const INSIGHT_HIGH_THRESHOLD: f64 = 3.5;

/// Actions of one category, ordered by priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet {
    /// Seven-day quick wins
    pub short_term: Vec<String>,
    /// Thirty-day transformations
    pub long_term: Vec<String>,
}

impl ActionSet {
    /// Build from static text
    pub fn from_static(short_term: &[&str], long_term: &[&str]) -> Self {
        Self {
            short_term: short_term.iter().map(|s| s.to_string()).collect(),
            long_term: long_term.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Action texts keyed by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTable<C: Category> {
    entries: BTreeMap<C, ActionSet>,
}

impl<C: Category> ActionTable<C> {
    /// Build a table; every category must have an entry
    pub fn new(entries: impl IntoIterator<Item = (C, ActionSet)>) -> Result<Self, ConfigDefect> {
        let entries: BTreeMap<C, ActionSet> = entries.into_iter().collect();
        if let Some(missing) = C::ALL.iter().find(|c| !entries.contains_key(c)) {
            return Err(ConfigDefect::MissingCategory {
                table: "action table",
                category: missing.as_str().to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// Actions of one category
    pub fn actions(&self, category: C) -> Option<&ActionSet> {
        self.entries.get(&category)
    }
}

/// Personalized plan for the two weakest categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPlan {
    /// Quick wins for the next seven days
    pub seven_day: Vec<String>,
    /// Deeper changes for the next thirty days
    pub thirty_day: Vec<String>,
}

/// Plan built from the weakest and second weakest categories
///
/// Each horizon holds the first [`PRIMARY_ACTIONS`] items of the weakest
/// category followed by the first [`SECONDARY_ACTIONS`] of the runner-up.
pub fn action_plan<C: Category>(primary: C, secondary: C, table: &ActionTable<C>) -> ActionPlan {
    let mut seven_day = pick(table, primary, PRIMARY_ACTIONS, Horizon::Short);
    seven_day.extend(pick(table, secondary, SECONDARY_ACTIONS, Horizon::Short));

    let mut thirty_day = pick(table, primary, PRIMARY_ACTIONS, Horizon::Long);
    thirty_day.extend(pick(table, secondary, SECONDARY_ACTIONS, Horizon::Long));

    ActionPlan {
        seven_day,
        thirty_day,
    }
}

#[derive(Clone, Copy)]
enum Horizon {
    Short,
    Long,
}

fn pick<C: Category>(table: &ActionTable<C>, category: C, take: usize, horizon: Horizon) -> Vec<String> {
    let Some(set) = table.actions(category) else {
        return Vec::new();
    };
    let items = match horizon {
        Horizon::Short => &set.short_term,
        Horizon::Long => &set.long_term,
    };
    items.iter().take(take).cloned().collect()
}

/// Lane diagnostic next steps
///
/// The lane's general steps followed by the step for the weakest category,
/// capped at [`MAX_NEXT_STEPS`].
pub fn lane_next_steps(lane: Lane, weakest: LaneCategory) -> Vec<String> {
    let mut steps: Vec<String> = tables::lane_steps(lane).iter().map(|s| s.to_string()).collect();
    steps.push(tables::category_step(weakest).to_string());
    steps.truncate(MAX_NEXT_STEPS);
    steps
}

/// Growth potential from the lane category scores
pub fn growth_potential(scores: &CategoryScores<LaneCategory>) -> GrowthPotential {
    let risk = scores.get(LaneCategory::RiskOpportunity);
    let systems = scores.get(LaneCategory::SystemsScalability);
    let time = scores.get(LaneCategory::TimeFreedom);

    if risk >= 4.0 && systems >= 3.5 {
        return GrowthPotential::High;
    }
    if risk >= 3.0 || systems >= 3.0 || time >= 3.5 {
        return GrowthPotential::Medium;
    }
    GrowthPotential::Low
}

/// Steps for moving from one lane to another
pub fn transition_roadmap(current: Lane, target: Lane) -> Vec<&'static str> {
    if current == target {
        return vec![tables::ROADMAP_ALREADY_THERE];
    }
    match tables::roadmap(current, target) {
        Some(steps) => steps.to_vec(),
        None => vec![tables::ROADMAP_FALLBACK],
    }
}

/// High and low insight texts of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    /// Shown when recent answers are strong
    pub high: String,
    /// Shown otherwise
    pub low: String,
}

/// Short encouragement after a run of answers in one category
///
/// Picks the `high` text when the mean of `recent` reaches
/// [`INSIGHT_HIGH_THRESHOLD`], the `low` text otherwise (including when
/// nothing was answered yet), and a generic line for unknown categories.
pub fn micro_insight<'a>(
    category: &str,
    recent: &[u8],
    insights: &'a BTreeMap<String, Insight>,
) -> &'a str {
    let Some(insight) = insights.get(category) else {
        return tables::INSIGHT_FALLBACK;
    };
    let high = !recent.is_empty()
        && recent.iter().map(|v| f64::from(*v)).sum::<f64>() / recent.len() as f64
            >= INSIGHT_HIGH_THRESHOLD;
    if high {
        &insight.high
    } else {
        &insight.low
    }
}
