//! Scoring table files
//!
//! A TOML file replaces any subset of a profile's built-in tables. Sections
//! that are absent keep the built-in values; sections that are present are
//! validated as a whole and a defect aborts startup.
//!
//! ```toml
//! name = "lane-diagnostic-2025"
//! tie_break = ["financial_mindset", "time_freedom", "risk_opportunity", "systems_scalability"]
//!
//! [questions]
//! LD1 = "financial_mindset"
//!
//! [weights]
//! financial_mindset = 0.30
//! time_freedom = 0.25
//! risk_opportunity = 0.25
//! systems_scalability = 0.20
//!
//! [[bands]]
//! label = "sidewalk"
//! min = 1.0
//! max = 2.4
//!
//! [[overrides]]
//! name = "financial-mindset-floor"
//! label = "sidewalk"
//! conditions = [{ category = "financial_mindset", at_most = 2.0 }]
//! ```

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use trajectory_domain::{
    Band, BandTable, Category, Classifier, Composite, Condition, ConfigDefect, LaneDiagnostic,
    LaneGame, Label, LifeAssessment, OverrideRule, QuestionMap, ScoringProfile, TieBreakOrder,
    WeightTable,
};

/// Parsed scoring table file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TablesFile {
    /// Profile name
    #[serde(default)]
    pub name: Option<String>,

    /// Question id to category name
    #[serde(default)]
    pub questions: Option<BTreeMap<String, String>>,

    /// Category names, highest tie-break precedence first
    #[serde(default)]
    pub tie_break: Option<Vec<String>>,

    /// Category weights; switches the profile to a weighted composite
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,

    /// Bands, lowest first
    #[serde(default)]
    pub bands: Option<Vec<BandEntry>>,

    /// Override rules in priority order
    #[serde(default)]
    pub overrides: Option<Vec<OverrideEntry>>,
}

/// One band of the file.
#[derive(Debug, Clone, Deserialize)]
pub struct BandEntry {
    /// Label name
    pub label: String,
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

/// One override rule of the file.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideEntry {
    /// Rule name
    pub name: String,
    /// Forced label name
    pub label: String,
    /// Conditions, all of which must hold
    pub conditions: Vec<ConditionEntry>,
}

/// One override condition of the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConditionEntry {
    /// `score(category) <= at_most`
    AtMost {
        /// Category name
        category: String,
        /// Inclusive upper limit
        at_most: f64,
    },
    /// `score(category) >= at_least`
    AtLeast {
        /// Category name
        category: String,
        /// Inclusive lower limit
        at_least: f64,
    },
}

impl TablesFile {
    /// Parse a table file from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a table file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Replace the sections of `profile` present in this file.
    pub fn apply<C: Category, L: Label>(&self, profile: &mut ScoringProfile<C, L>) -> std::result::Result<(), ConfigDefect> {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }

        if let Some(questions) = &self.questions {
            profile.question_map = QuestionMap::from_names(questions.iter().map(|(q, c)| (q.clone(), c)))?;
        }

        if let Some(order) = &self.tie_break {
            let order = order.iter().map(|name| parse_category(name)).collect::<std::result::Result<Vec<C>, _>>()?;
            profile.tie_break = TieBreakOrder::new(order)?;
        }

        if let Some(weights) = &self.weights {
            let weights = weights
                .iter()
                .map(|(name, weight)| Ok((parse_category(name)?, *weight)))
                .collect::<std::result::Result<Vec<(C, f64)>, ConfigDefect>>()?;
            profile.composite = Composite::Weighted(WeightTable::new(weights)?);
        }

        if self.bands.is_some() || self.overrides.is_some() {
            let bands = match &self.bands {
                Some(entries) => BandTable::new(
                    entries
                        .iter()
                        .map(|b| Ok(Band::new(parse_label(&b.label)?, b.min, b.max)))
                        .collect::<std::result::Result<Vec<Band<L>>, ConfigDefect>>()?,
                )?,
                None => profile.classifier.bands().clone(),
            };
            let overrides = match &self.overrides {
                Some(entries) => entries.iter().map(override_rule::<C, L>).collect::<std::result::Result<Vec<_>, _>>()?,
                None => profile.classifier.overrides().to_vec(),
            };
            profile.classifier = Classifier::new(bands, overrides)?;
        }

        Ok(())
    }
}

fn parse_category<C: Category>(name: &str) -> std::result::Result<C, ConfigDefect> {
    C::parse(name).ok_or_else(|| ConfigDefect::UnknownCategory { name: name.to_string() })
}

fn parse_label<L: Label>(name: &str) -> std::result::Result<L, ConfigDefect> {
    L::parse(name).ok_or_else(|| ConfigDefect::UnknownLabel { name: name.to_string() })
}

fn override_rule<C: Category, L: Label>(entry: &OverrideEntry) -> std::result::Result<OverrideRule<C, L>, ConfigDefect> {
    let conditions = entry
        .conditions
        .iter()
        .map(|condition| match condition {
            ConditionEntry::AtMost { category, at_most } => Ok(Condition::at_most(parse_category(category)?, *at_most)),
            ConditionEntry::AtLeast { category, at_least } => Ok(Condition::at_least(parse_category(category)?, *at_least)),
        })
        .collect::<std::result::Result<Vec<_>, ConfigDefect>>()?;
    Ok(OverrideRule::new(entry.name.clone(), conditions, parse_label(&entry.label)?))
}

fn load(path: Option<&Path>) -> Result<Option<TablesFile>> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading scoring tables");
            Ok(Some(TablesFile::from_file(path)?))
        }
        None => Ok(None),
    }
}

/// Life assessment engine with an optional table file applied.
pub fn life_engine(path: Option<&Path>) -> Result<LifeAssessment> {
    let mut engine = LifeAssessment::standard()?;
    if let Some(file) = load(path)? {
        file.apply(&mut engine.profile)?;
    }
    Ok(engine)
}

/// Lane diagnostic engine with an optional table file applied.
pub fn lane_engine(path: Option<&Path>) -> Result<LaneDiagnostic> {
    let mut engine = LaneDiagnostic::standard()?;
    if let Some(file) = load(path)? {
        file.apply(&mut engine.profile)?;
    }
    Ok(engine)
}

/// Lane game engine with an optional table file applied.
pub fn game_engine(path: Option<&Path>) -> Result<LaneGame> {
    let mut engine = LaneGame::standard()?;
    if let Some(file) = load(path)? {
        file.apply(&mut engine.profile)?;
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory_domain::{AnswerSet, LaneCategory, Lane};

    #[test]
    fn test_empty_file_keeps_builtin_tables() {
        let file = TablesFile::from_toml("").unwrap();
        let mut engine = LaneDiagnostic::standard().unwrap();
        let before = engine.profile.clone();
        file.apply(&mut engine.profile).unwrap();
        assert_eq!(engine.profile, before);
    }

    #[test]
    fn test_bands_keep_builtin_overrides() {
        let file = TablesFile::from_toml(
            r#"
            [[bands]]
            label = "sidewalk"
            min = 1.0
            max = 2.9
            [[bands]]
            label = "slowlane"
            min = 3.0
            max = 3.9
            [[bands]]
            label = "fastlane"
            min = 4.0
            max = 5.0
            "#,
        )
        .unwrap();
        let mut engine = LaneDiagnostic::standard().unwrap();
        file.apply(&mut engine.profile).unwrap();

        assert_eq!(engine.profile.classifier.overrides().len(), 2);
        let answers: AnswerSet = (1..=18).map(|n| (format!("LD{}", n), 3u8)).collect();
        assert_eq!(engine.assess(&answers).card.label(), Lane::Slowlane);
    }

    #[test]
    fn test_weights_and_overrides() {
        let file = TablesFile::from_toml(
            r#"
            name = "custom"
            [weights]
            financial_mindset = 0.25
            time_freedom = 0.25
            risk_opportunity = 0.25
            systems_scalability = 0.25

            [[overrides]]
            name = "risk-floor"
            label = "sidewalk"
            conditions = [{ category = "risk_opportunity", at_most = 1.5 }]
            "#,
        )
        .unwrap();
        let mut engine = LaneDiagnostic::standard().unwrap();
        file.apply(&mut engine.profile).unwrap();

        assert_eq!(engine.profile.name, "custom");
        assert_eq!(engine.profile.classifier.overrides().len(), 1);
        match &engine.profile.composite {
            Composite::Weighted(table) => assert_eq!(table.weight(LaneCategory::TimeFreedom), 0.25),
            Composite::Mean => panic!("Expected weighted composite"),
        }
    }

    #[test]
    fn test_defects_fail_fast() {
        let gap = TablesFile::from_toml(
            r#"
            [[bands]]
            label = "sidewalk"
            min = 1.0
            max = 2.0
            [[bands]]
            label = "fastlane"
            min = 3.0
            max = 5.0
            "#,
        )
        .unwrap();
        let mut engine = LaneDiagnostic::standard().unwrap();
        assert!(matches!(gap.apply(&mut engine.profile), Err(ConfigDefect::BandGap { .. })));

        let weights = TablesFile::from_toml("[weights]\nfinancial_mindset = 1.5").unwrap();
        assert!(weights.apply(&mut engine.profile).is_err());

        let unknown = TablesFile::from_toml("[questions]\nQ1 = \"career\"").unwrap();
        assert!(matches!(
            unknown.apply(&mut engine.profile),
            Err(ConfigDefect::UnknownCategory { .. })
        ));

        let label = TablesFile::from_toml(
            "[[overrides]]\nname = \"x\"\nlabel = \"skyway\"\nconditions = [{ category = \"time_freedom\", at_least = 4.0 }]",
        )
        .unwrap();
        assert!(matches!(
            label.apply(&mut engine.profile),
            Err(ConfigDefect::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_engine_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("life.toml");
        std::fs::write(&path, "tie_break = [\"focus\", \"emotions\", \"relationships\", \"finances\", \"health\", \"identity\"]").unwrap();

        let engine = life_engine(Some(path.as_path())).unwrap();
        let report = engine.assess(&AnswerSet::new());
        assert_eq!(report.lowest_two[0], trajectory_domain::LifeDomain::Focus);

        assert!(life_engine(Some(Path::new("/nonexistent/life.toml"))).is_err());
    }
}
