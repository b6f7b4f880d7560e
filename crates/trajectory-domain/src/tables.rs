//! Built-in configuration tables
//!
//! Question maps, band tables, weights, override thresholds and text banks
//! of the three shipped assessments. The constructors validate the tables
//! exactly as they validate tables loaded from configuration files.

use crate::classify::{Band, BandTable, Classifier, Condition, OverrideRule};
use crate::composite::WeightTable;
use crate::recommend::{ActionSet, ActionTable};
use crate::{Avatar, ConfigDefect, LaneCategory, Lane, LifeDomain, QuestionMap};

/// Version tag of the built-in tables
pub const TABLES_VERSION: &str = "2024.1";

/// Name of the lane floor override rule
pub const LANE_FLOOR_RULE: &str = "financial-mindset-floor";

/// `financial_mindset` at or below this forces `sidewalk`
pub const LANE_FLOOR_FINANCIAL_MINDSET: f64 = 2.0;

/// Name of the lane ceiling override rule
pub const LANE_CEILING_RULE: &str = "systems-and-risk-ceiling";

/// `systems_scalability` at or above this (together with risk) forces `fastlane`
pub const LANE_CEILING_SYSTEMS: f64 = 4.0;

/// `risk_opportunity` at or above this (together with systems) forces `fastlane`
pub const LANE_CEILING_RISK: f64 = 3.5;

/// Roadmap step when the current lane is already the target
pub const ROADMAP_ALREADY_THERE: &str =
    "You're already in your target lane! Focus on optimization and growth.";

/// Roadmap step for transitions without a dedicated roadmap
pub const ROADMAP_FALLBACK: &str = "Focus on improving your current lane before transitioning.";

/// Insight shown for categories without an insight entry
pub const INSIGHT_FALLBACK: &str = "Keep going—you're making progress.";

/// Question map of the life assessment (Q1-Q15)
pub fn life_question_map() -> QuestionMap<LifeDomain> {
    use LifeDomain::*;
    QuestionMap::new([
        ("Q1", Identity),
        ("Q2", Identity),
        ("Q3", Identity),
        ("Q4", Health),
        ("Q5", Health),
        ("Q6", Finances),
        ("Q7", Finances),
        ("Q8", Finances),
        ("Q9", Relationships),
        ("Q10", Relationships),
        ("Q11", Relationships),
        ("Q12", Emotions),
        ("Q13", Emotions),
        ("Q14", Focus),
        ("Q15", Focus),
    ])
}

/// Question map of the lane diagnostic (LD1-LD18)
pub fn lane_question_map() -> QuestionMap<LaneCategory> {
    let category = |n: u32| match n {
        1..=5 => LaneCategory::FinancialMindset,
        6..=9 => LaneCategory::TimeFreedom,
        10..=13 => LaneCategory::RiskOpportunity,
        _ => LaneCategory::SystemsScalability,
    };
    QuestionMap::new((1..=18).map(|n| (format!("LD{}", n), category(n))))
}

/// Avatar bands: Drifter 1.0-3.1, Balancer 3.2-4.1, Architect 4.2-5.0
pub fn avatar_bands() -> Result<BandTable<Avatar>, ConfigDefect> {
    BandTable::new(vec![
        Band::new(Avatar::Drifter, 1.0, 3.1),
        Band::new(Avatar::Balancer, 3.2, 4.1),
        Band::new(Avatar::Architect, 4.2, 5.0),
    ])
}

/// Lane diagnostic bands: sidewalk 1.0-2.4, slowlane 2.5-3.4, fastlane 3.5-5.0
pub fn lane_diagnostic_bands() -> Result<BandTable<Lane>, ConfigDefect> {
    BandTable::new(vec![
        Band::new(Lane::Sidewalk, 1.0, 2.4),
        Band::new(Lane::Slowlane, 2.5, 3.4),
        Band::new(Lane::Fastlane, 3.5, 5.0),
    ])
}

/// Lane game bands: sidewalk 1.0-2.5, slowlane 2.6-3.5, fastlane 3.6-5.0
pub fn lane_game_bands() -> Result<BandTable<Lane>, ConfigDefect> {
    BandTable::new(vec![
        Band::new(Lane::Sidewalk, 1.0, 2.5),
        Band::new(Lane::Slowlane, 2.6, 3.5),
        Band::new(Lane::Fastlane, 3.6, 5.0),
    ])
}

/// Lane diagnostic weights (0.30 / 0.25 / 0.25 / 0.20)
pub fn lane_weights() -> Result<WeightTable<LaneCategory>, ConfigDefect> {
    WeightTable::new([
        (LaneCategory::FinancialMindset, 0.3),
        (LaneCategory::TimeFreedom, 0.25),
        (LaneCategory::RiskOpportunity, 0.25),
        (LaneCategory::SystemsScalability, 0.2),
    ])
}

/// Lane diagnostic override rules, in priority order
///
/// Only financial mindset, systems and risk take part; the thresholds are
/// tuned for the four lane categories and do not carry over to other sets.
pub fn lane_overrides() -> Vec<OverrideRule<LaneCategory, Lane>> {
    vec![
        OverrideRule::new(
            LANE_FLOOR_RULE,
            vec![Condition::at_most(
                LaneCategory::FinancialMindset,
                LANE_FLOOR_FINANCIAL_MINDSET,
            )],
            Lane::Sidewalk,
        ),
        OverrideRule::new(
            LANE_CEILING_RULE,
            vec![
                Condition::at_least(LaneCategory::SystemsScalability, LANE_CEILING_SYSTEMS),
                Condition::at_least(LaneCategory::RiskOpportunity, LANE_CEILING_RISK),
            ],
            Lane::Fastlane,
        ),
    ]
}

/// Lane diagnostic classifier: bands plus override rules
pub fn lane_diagnostic_classifier() -> Result<Classifier<LaneCategory, Lane>, ConfigDefect> {
    Classifier::new(lane_diagnostic_bands()?, lane_overrides())
}

/// Seven-day and thirty-day actions per life domain
pub fn life_actions() -> Result<ActionTable<LifeDomain>, ConfigDefect> {
    ActionTable::new([
        (
            LifeDomain::Identity,
            ActionSet::from_static(
                &[
                    "Write down your top 3 values",
                    "Identify one daily choice that aligns with your values",
                    "Practice positive self-talk for 5 minutes daily",
                ],
                &[
                    "Create a personal mission statement",
                    "Set 3 identity-aligned goals for the next quarter",
                    "Establish a daily values check-in routine",
                ],
            ),
        ),
        (
            LifeDomain::Health,
            ActionSet::from_static(
                &[
                    "Go to bed 30 minutes earlier",
                    "Take a 10-minute walk daily",
                    "Drink one extra glass of water each day",
                ],
                &[
                    "Establish a consistent sleep schedule",
                    "Create a sustainable exercise routine",
                    "Develop stress management techniques",
                ],
            ),
        ),
        (
            LifeDomain::Finances,
            ActionSet::from_static(
                &[
                    "Track all expenses for one week",
                    "Calculate your net worth",
                    "Set up automatic savings transfer",
                ],
                &[
                    "Create a monthly budget",
                    "Build a 3-month emergency fund",
                    "Start investing in your future",
                ],
            ),
        ),
        (
            LifeDomain::Relationships,
            ActionSet::from_static(
                &[
                    "Reach out to one person who lifts your energy",
                    "Have one meaningful conversation",
                    "Express gratitude to someone important",
                ],
                &[
                    "Strengthen relationships with positive people",
                    "Address one relationship tension with care",
                    "Find a mentor or accountability partner",
                ],
            ),
        ),
        (
            LifeDomain::Emotions,
            ActionSet::from_static(
                &[
                    "Practice 5 minutes of deep breathing daily",
                    "Identify your emotional triggers",
                    "Use the 5-4-3-2-1 grounding technique",
                ],
                &[
                    "Develop emotional regulation strategies",
                    "Practice mindfulness meditation",
                    "Create an emotional support system",
                ],
            ),
        ),
        (
            LifeDomain::Focus,
            ActionSet::from_static(
                &[
                    "Eliminate one major distraction",
                    "Use the Pomodoro technique for focused work",
                    "Create a distraction-free workspace",
                ],
                &[
                    "Establish a daily priority-setting routine",
                    "Implement time-blocking for important tasks",
                    "Develop systems to minimize decision fatigue",
                ],
            ),
        ),
    ])
}

/// General next steps of a lane (lane diagnostic)
pub fn lane_steps(lane: Lane) -> &'static [&'static str] {
    match lane {
        Lane::Sidewalk => &[
            "Create a basic budget and track all expenses",
            "Build a $1,000 emergency fund",
            "Stop using credit cards for non-essentials",
            "Read 'The Millionaire Fastlane' by MJ DeMarco",
        ],
        Lane::Slowlane => &[
            "Increase your savings rate to 20% of income",
            "Start investing in index funds or ETFs",
            "Consider starting a side business",
            "Learn about business and entrepreneurship",
        ],
        Lane::Fastlane => &[
            "Focus on building systems and assets",
            "Look for opportunities to create leverage",
            "Consider scaling your current business",
            "Mentor others who want to enter the fastlane",
        ],
    }
}

/// Extra step for the weakest lane category
pub fn category_step(category: LaneCategory) -> &'static str {
    match category {
        LaneCategory::FinancialMindset => "Read books on financial literacy and wealth building",
        LaneCategory::TimeFreedom => "Define what financial freedom means to you",
        LaneCategory::RiskOpportunity => "Start taking small calculated risks",
        LaneCategory::SystemsScalability => "Learn about business systems and automation",
    }
}

/// Next steps of a lane in the lane game
pub fn game_steps(lane: Lane) -> &'static [&'static str] {
    match lane {
        Lane::Sidewalk => &[
            "Create a basic budget and track expenses for 30 days",
            "Build a $1,000 emergency fund before any other goals",
            "Read 'The Millionaire Fastlane' to shift your money mindset",
        ],
        Lane::Slowlane => &[
            "Maximize your 401k match and open a Roth IRA",
            "Start a side hustle to create additional income streams",
            "Learn about business and entrepreneurship basics",
        ],
        Lane::Fastlane => &[
            "Identify one scalable business opportunity to pursue",
            "Build systems and processes that work without your direct involvement",
            "Focus on creating assets that generate passive income",
        ],
    }
}

/// Static description of a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneDescription {
    /// Display name
    pub name: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// Typical characteristics
    pub characteristics: &'static [&'static str],
}

/// Description of a lane
pub fn lane_description(lane: Lane) -> &'static LaneDescription {
    const SIDEWALK: LaneDescription = LaneDescription {
        name: "Sidewalk Lane",
        description: "You're living in the moment, but the moment is costing you your future. \
            You're focused on consumption rather than creation, and your financial habits are \
            keeping you trapped in a cycle of dependency.",
        characteristics: &[
            "Spends more than earns",
            "No emergency fund",
            "Consumer-focused mindset",
            "No long-term financial plan",
            "Lives paycheck to paycheck",
        ],
    };
    const SLOWLANE: LaneDescription = LaneDescription {
        name: "Slowlane",
        description: "You're building wealth, but you're trading time for money at a 1:1 ratio. \
            You understand the importance of saving and investing, but you're still dependent \
            on your job for income.",
        characteristics: &[
            "Trades time for money",
            "Linear income growth",
            "Traditional retirement planning",
            "Security over growth",
            "Dependent on employment",
        ],
    };
    const FASTLANE: LaneDescription = LaneDescription {
        name: "Fastlane",
        description: "You understand systems, leverage, and exponential growth. You're building \
            assets and creating multiple income streams, but you might be missing the community \
            and support to accelerate your journey.",
        characteristics: &[
            "Builds systems and assets",
            "Exponential income potential",
            "Leverage and multiplication",
            "Freedom and control",
            "Multiple income streams",
        ],
    };

    match lane {
        Lane::Sidewalk => &SIDEWALK,
        Lane::Slowlane => &SLOWLANE,
        Lane::Fastlane => &FASTLANE,
    }
}

/// Dedicated roadmap between two lanes, if one exists
pub fn roadmap(current: Lane, target: Lane) -> Option<&'static [&'static str]> {
    match (current, target) {
        (Lane::Sidewalk, Lane::Slowlane) => Some(&[
            "Create and stick to a budget",
            "Build a $1,000 emergency fund",
            "Start saving 10% of your income",
            "Learn about compound interest",
            "Begin investing in index funds",
        ]),
        (Lane::Sidewalk, Lane::Fastlane) => Some(&[
            "Read 'The Millionaire Fastlane' by MJ DeMarco",
            "Identify a skill you can monetize",
            "Start a small side business",
            "Learn about business systems",
            "Find a mentor in your target industry",
        ]),
        (Lane::Slowlane, Lane::Fastlane) => Some(&[
            "Start a side business while keeping your job",
            "Learn about leverage and systems",
            "Build multiple income streams",
            "Invest in business education",
            "Network with other entrepreneurs",
        ]),
        _ => None,
    }
}
