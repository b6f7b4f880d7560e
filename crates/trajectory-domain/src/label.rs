//! Label module - ordinal classification outcomes

use std::fmt;

/// An ordinal classification label
///
/// `ALL` lists the labels from the lowest band to the highest.
pub trait Label: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every label, lowest first
    const ALL: &'static [Self];

    /// Stable wire name of the label
    fn as_str(&self) -> &'static str;

    /// Parse a label from its wire name
    fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Position of the label in the ordinal scale (0 = lowest)
    fn rank(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }
}

/// Avatar assigned by the life assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Avatar {
    /// Lost, reactive, lacking clear direction
    Drifter,

    /// Stable and functional but not optimized
    Balancer,

    /// Intentional life design
    Architect,
}

impl Label for Avatar {
    const ALL: &'static [Self] = &[Avatar::Drifter, Avatar::Balancer, Avatar::Architect];

    fn as_str(&self) -> &'static str {
        match self {
            Avatar::Drifter => "Drifter",
            Avatar::Balancer => "Balancer",
            Avatar::Architect => "Architect",
        }
    }
}

/// Financial lane assigned by the lane diagnostic and the lane game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Consumption over creation
    Sidewalk,

    /// Trading time for money
    Slowlane,

    /// Building systems and assets
    Fastlane,
}

impl Label for Lane {
    const ALL: &'static [Self] = &[Lane::Sidewalk, Lane::Slowlane, Lane::Fastlane];

    fn as_str(&self) -> &'static str {
        match self {
            Lane::Sidewalk => "sidewalk",
            Lane::Slowlane => "slowlane",
            Lane::Fastlane => "fastlane",
        }
    }
}

/// Grade of a single domain score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLabel {
    /// Requires immediate intervention (<= 3.1)
    Unacceptable,

    /// Functional but room for growth (3.2 - 4.1)
    Acceptable,

    /// Mastery level (>= 4.2)
    Desirable,
}

impl ScoreLabel {
    /// Grade a domain score using the avatar band ceilings
    pub fn for_score(score: f64) -> Self {
        if score <= 3.1 {
            ScoreLabel::Unacceptable
        } else if score <= 4.1 {
            ScoreLabel::Acceptable
        } else {
            ScoreLabel::Desirable
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Unacceptable => "Unacceptable",
            ScoreLabel::Acceptable => "Acceptable",
            ScoreLabel::Desirable => "Desirable",
        }
    }
}

/// Growth potential estimated by the lane diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthPotential {
    /// No strong growth signal
    Low,
    /// Some growth signal
    Medium,
    /// Strong risk appetite backed by systems thinking
    High,
}

impl GrowthPotential {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthPotential::Low => "low",
            GrowthPotential::Medium => "medium",
            GrowthPotential::High => "high",
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Lane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Lane as Label>::parse(s).ok_or_else(|| format!("Invalid lane: {}", s))
    }
}
