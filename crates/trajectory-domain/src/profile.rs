//! Scoring profiles: one configured pipeline from answers to a score card

use crate::aggregate::aggregate;
use crate::confidence::dispersion_confidence;
use crate::ranking::rank_ascending;
use crate::{
    AnswerSet, Category, CategoryScores, Classification, Classifier, Composite, Label, QuestionMap,
    TieBreakOrder,
};

/// Immutable configuration of one scoring variant
///
/// Built once at startup and shared read-only by every scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile<C: Category, L: Label> {
    /// Profile name, used in logs and result records
    pub name: String,
    /// Question id to category mapping
    pub question_map: QuestionMap<C>,
    /// Composite scoring rule
    pub composite: Composite<C>,
    /// Bands and override rules
    pub classifier: Classifier<C, L>,
    /// Precedence for equal category scores
    pub tie_break: TieBreakOrder<C>,
}

/// Output of one profile run
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard<C: Category, L: Label> {
    /// Per-category means, rounded
    pub category_scores: CategoryScores<C>,
    /// Composite score, rounded
    pub overall: f64,
    /// Assigned label and responsible override
    pub classification: Classification<L>,
    /// Dispersion confidence in [0, 1]
    pub confidence: f64,
    /// Every category, weakest first
    pub ranking: Vec<C>,
}

impl<C: Category, L: Label> ScoreCard<C, L> {
    /// Assigned label
    pub fn label(&self) -> L {
        self.classification.label
    }

    /// The `n` weakest categories, weakest first
    pub fn lowest(&self, n: usize) -> &[C] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// The weakest category
    pub fn weakest(&self) -> Option<C> {
        self.ranking.first().copied()
    }
}

impl<C: Category, L: Label> ScoringProfile<C, L> {
    /// Run the full pipeline over one answer set
    pub fn score(&self, answers: &AnswerSet) -> ScoreCard<C, L> {
        let category_scores = aggregate(answers, &self.question_map);
        let overall = self.composite.score(&category_scores);
        let classification = self.classifier.explain(overall, &category_scores);
        let confidence = dispersion_confidence(overall, &category_scores, self.classifier.bands());
        let ranking = rank_ascending(&category_scores, &self.tie_break);

        ScoreCard {
            category_scores,
            overall,
            classification,
            confidence,
            ranking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tables, Avatar, LifeDomain};

    fn life_profile() -> ScoringProfile<LifeDomain, Avatar> {
        ScoringProfile {
            name: "life".to_string(),
            question_map: tables::life_question_map(),
            composite: Composite::Mean,
            classifier: Classifier::bands_only(tables::avatar_bands().unwrap()),
            tie_break: TieBreakOrder::default(),
        }
    }

    #[test]
    fn test_score_card() {
        let answers: AnswerSet = (1..=15).map(|i| (format!("Q{}", i), 5u8)).collect();
        let card = life_profile().score(&answers);

        assert_eq!(card.overall, 5.0);
        assert_eq!(card.label(), Avatar::Architect);
        assert_eq!(card.ranking.len(), 6);
        assert_eq!(card.lowest(2), &[LifeDomain::Identity, LifeDomain::Health]);
        assert_eq!(card.lowest(10).len(), 6);
        assert_eq!(card.weakest(), Some(LifeDomain::Identity));
        assert_eq!(card.confidence, 1.0);
    }

    #[test]
    fn test_empty_answers() {
        let card = life_profile().score(&AnswerSet::new());
        assert_eq!(card.overall, 0.0);
        assert_eq!(card.label(), Avatar::Drifter);
        assert!(card.category_scores.values().iter().all(|v| *v == 0.0));
    }
}
