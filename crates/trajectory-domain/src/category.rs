//! Category module - the closed sets of scored categories

use std::fmt;
use std::hash::Hash;

/// A scored category of an assessment
///
/// Implemented by small closed enumerations. `ALL` lists every variant in its
/// canonical order, which is also the default tie-break precedence.
pub trait Category: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every category of the enumeration, in canonical order
    const ALL: &'static [Self];

    /// Stable wire name of the category
    fn as_str(&self) -> &'static str;

    /// Parse a category from its wire name
    fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.as_str() == wanted)
    }
}

/// The six life domains of the life assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifeDomain {
    /// Core values, self-concept, authenticity
    Identity,

    /// Physical wellbeing, sleep, exercise
    Health,

    /// Money management, wealth building, financial security
    Finances,

    /// Social connections, intimacy, community
    Relationships,

    /// Emotional regulation, resilience, mental state
    Emotions,

    /// Attention, productivity, purpose clarity
    Focus,
}

impl Category for LifeDomain {
    const ALL: &'static [Self] = &[
        LifeDomain::Identity,
        LifeDomain::Health,
        LifeDomain::Finances,
        LifeDomain::Relationships,
        LifeDomain::Emotions,
        LifeDomain::Focus,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LifeDomain::Identity => "identity",
            LifeDomain::Health => "health",
            LifeDomain::Finances => "finances",
            LifeDomain::Relationships => "relationships",
            LifeDomain::Emotions => "emotions",
            LifeDomain::Focus => "focus",
        }
    }
}

/// The four categories of the lane diagnostic and the lane game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LaneCategory {
    /// Attitude towards money, spending and saving
    FinancialMindset,

    /// How much of the week is owned rather than sold
    TimeFreedom,

    /// Appetite for calculated risk
    RiskOpportunity,

    /// Systems thinking and leverage
    SystemsScalability,
}

impl Category for LaneCategory {
    const ALL: &'static [Self] = &[
        LaneCategory::FinancialMindset,
        LaneCategory::TimeFreedom,
        LaneCategory::RiskOpportunity,
        LaneCategory::SystemsScalability,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LaneCategory::FinancialMindset => "financial_mindset",
            LaneCategory::TimeFreedom => "time_freedom",
            LaneCategory::RiskOpportunity => "risk_opportunity",
            LaneCategory::SystemsScalability => "systems_scalability",
        }
    }
}

impl fmt::Display for LifeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LaneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
