//! Answer sets and question-to-category maps

use crate::{Category, ConfigDefect};
use std::collections::BTreeMap;

/// Answers of one submission: question id -> response on the 1..=5 scale
///
/// The core does not re-validate the scale; out-of-range values are rejected
/// by the intake gatekeeper before they reach this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(BTreeMap<String, u8>);

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer to the same question
    pub fn insert(&mut self, question_id: impl Into<String>, value: u8) -> Option<u8> {
        self.0.insert(question_id.into(), value)
    }

    /// Look up the answer to a question
    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.0.get(question_id).copied()
    }

    /// Iterate answers in question id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }

    /// Number of answered questions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was answered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Static mapping from question id to category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionMap<C: Category> {
    entries: BTreeMap<String, C>,
}

impl<C: Category> QuestionMap<C> {
    /// Build a map from typed entries
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, C)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }

    /// Build a map from category names, as found in configuration files
    pub fn from_names<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigDefect>
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (question, name) in entries {
            let category = C::parse(name.as_ref()).ok_or_else(|| ConfigDefect::UnknownCategory {
                name: name.as_ref().to_string(),
            })?;
            map.insert(question.into(), category);
        }
        Ok(Self { entries: map })
    }

    /// Category a question belongs to, if the question is known
    pub fn category_of(&self, question_id: &str) -> Option<C> {
        self.entries.get(question_id).copied()
    }

    /// Question ids mapped to a category, in id order
    pub fn questions_for(&self, category: C) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, C)> {
        self.entries.iter().map(|(id, c)| (id.as_str(), *c))
    }

    /// Number of mapped questions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifeDomain;

    #[test]
    fn test_insert_replaces_previous_answer() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.insert("Q1", 2), None);
        assert_eq!(answers.insert("Q1", 4), Some(2));
        assert_eq!(answers.get("Q1"), Some(4));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_from_names_rejects_unknown_category() {
        let result = QuestionMap::<LifeDomain>::from_names([("Q1", "identity"), ("Q2", "wealth")]);
        assert_eq!(
            result,
            Err(ConfigDefect::UnknownCategory {
                name: "wealth".to_string()
            })
        );
    }

    #[test]
    fn test_questions_for_category() {
        let map = QuestionMap::new([
            ("Q1", LifeDomain::Identity),
            ("Q2", LifeDomain::Identity),
            ("Q4", LifeDomain::Health),
        ]);
        assert_eq!(map.questions_for(LifeDomain::Identity), vec!["Q1", "Q2"]);
        assert_eq!(map.category_of("Q4"), Some(LifeDomain::Health));
        assert_eq!(map.category_of("Q99"), None);
    }
}
