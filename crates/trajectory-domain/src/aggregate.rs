//! Answer aggregation

use crate::scores::round2;
use crate::{AnswerSet, Category, CategoryScores, QuestionMap};
use std::collections::BTreeMap;

/// Group answers by category and average them
///
/// Every category of the enumeration gets a score, rounded to two decimals.
/// Categories without answers score 0.0; unknown question ids are ignored so
/// partial or versioned question sets still score. Sums are accumulated as
/// integers, so the result does not depend on iteration order.
pub fn aggregate<C: Category>(answers: &AnswerSet, question_map: &QuestionMap<C>) -> CategoryScores<C> {
    let mut totals: BTreeMap<C, (u32, u32)> = BTreeMap::new();

    for (question_id, value) in answers.iter() {
        if let Some(category) = question_map.category_of(question_id) {
            let entry = totals.entry(category).or_insert((0, 0));
            entry.0 += u32::from(value);
            entry.1 += 1;
        }
    }

    CategoryScores::from_fn(|category| match totals.get(&category) {
        Some(&(sum, count)) if count > 0 => round2(f64::from(sum) / f64::from(count)),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tables, LifeDomain};

    #[test]
    fn test_domain_means_are_rounded() {
        let map = tables::life_question_map();
        let answers: AnswerSet = [("Q1", 4), ("Q2", 3), ("Q3", 5), ("Q6", 2), ("Q7", 3), ("Q8", 2)]
            .into_iter()
            .collect();

        let scores = aggregate(&answers, &map);

        assert_eq!(scores.get(LifeDomain::Identity), 4.0);
        assert_eq!(scores.get(LifeDomain::Finances), 2.33);
    }

    #[test]
    fn test_unanswered_domain_scores_zero() {
        let map = tables::life_question_map();
        let answers: AnswerSet = [("Q4", 5)].into_iter().collect();

        let scores = aggregate(&answers, &map);

        assert_eq!(scores.get(LifeDomain::Health), 5.0);
        for domain in [
            LifeDomain::Identity,
            LifeDomain::Finances,
            LifeDomain::Relationships,
            LifeDomain::Emotions,
            LifeDomain::Focus,
        ] {
            assert_eq!(scores.get(domain), 0.0);
        }
    }

    #[test]
    fn test_unknown_questions_are_ignored() {
        let map = tables::life_question_map();
        let answers: AnswerSet = [("Q1", 2), ("LD1", 5), ("bonus", 1)].into_iter().collect();

        let scores = aggregate(&answers, &map);

        assert_eq!(scores.get(LifeDomain::Identity), 2.0);
        assert_eq!(scores.values().iter().filter(|s| **s > 0.0).count(), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{tables, LifeDomain};
    use proptest::prelude::*;

    fn answer_values() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(1u8..=5, 15)
    }

    fn life_answers(values: &[u8]) -> AnswerSet {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("Q{}", i + 1), *v))
            .collect()
    }

    proptest! {
        /// Property: category scores stay within [1, 5] when every question is answered
        #[test]
        fn test_scores_in_range(values in answer_values()) {
            let scores = aggregate(&life_answers(&values), &tables::life_question_map());
            for (_, score) in scores.iter() {
                prop_assert!((1.0..=5.0).contains(&score));
            }
        }

        /// Property: scores carry at most two decimals and repeat exactly
        #[test]
        fn test_scores_are_stable(values in answer_values()) {
            let answers = life_answers(&values);
            let first = aggregate(&answers, &tables::life_question_map());
            let second = aggregate(&answers, &tables::life_question_map());
            prop_assert_eq!(&first, &second);
            for (_, score) in first.iter() {
                prop_assert_eq!(round2(score), score);
            }
        }

        /// Property: raising one answer never lowers its domain score
        #[test]
        fn test_monotonic_in_each_answer(values in answer_values(), index in 0usize..15) {
            prop_assume!(values[index] < 5);
            let map = tables::life_question_map();
            let before = aggregate(&life_answers(&values), &map);

            let mut raised = values.clone();
            raised[index] += 1;
            let after = aggregate(&life_answers(&raised), &map);

            let question = format!("Q{}", index + 1);
            let domain: LifeDomain = map.category_of(&question).unwrap();
            prop_assert!(after.get(domain) >= before.get(domain));
        }
    }
}
