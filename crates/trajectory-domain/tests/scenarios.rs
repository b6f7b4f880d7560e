//! Integration tests for trajectory-domain
//!
//! End-to-end scoring of representative submissions through the built-in
//! engines.

use trajectory_domain::confidence::behavioral_confidence;
use trajectory_domain::{
    AnswerSet, Avatar, BehavioralPolicy, ConfidenceFactors, GameEvent, GameSession, LaneCategory,
    LaneDiagnostic, LaneGame, Lane, LifeAssessment, LifeDomain,
};

fn life_answers(values: [u8; 15]) -> AnswerSet {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("Q{}", i + 1), *v))
        .collect()
}

fn uniform_lane_answers(value: u8) -> AnswerSet {
    (1..=18).map(|n| (format!("LD{}", n), value)).collect()
}

#[test]
fn test_mixed_life_submission() {
    let engine = LifeAssessment::standard().unwrap();
    let report = engine.assess(&life_answers([5, 5, 5, 1, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3]));
    let scores = &report.card.category_scores;

    assert_eq!(scores.get(LifeDomain::Identity), 5.0);
    assert_eq!(scores.get(LifeDomain::Health), 1.0);
    assert_eq!(scores.get(LifeDomain::Finances), 3.0);
    assert_eq!(scores.get(LifeDomain::Relationships), 3.0);
    assert_eq!(scores.get(LifeDomain::Emotions), 3.0);
    assert_eq!(scores.get(LifeDomain::Focus), 3.0);
    assert_eq!(report.card.overall, 3.0);

    // 3.0 lies inside the lowest avatar band [1.0, 3.1]
    assert_eq!(report.card.label(), Avatar::Drifter);
    assert_eq!(report.lowest_two, [LifeDomain::Health, LifeDomain::Finances]);
    assert_eq!(
        report.actions.seven_day,
        vec![
            "Go to bed 30 minutes earlier",
            "Take a 10-minute walk daily",
            "Track all expenses for one week",
        ]
    );
}

#[test]
fn test_all_minimum_answers() {
    let life = LifeAssessment::standard().unwrap().assess(&life_answers([1; 15]));
    assert!(life.card.category_scores.values().iter().all(|v| *v == 1.0));
    assert_eq!(life.card.overall, 1.0);
    assert_eq!(life.card.label(), Avatar::Drifter);

    let lane = LaneDiagnostic::standard().unwrap().assess(&uniform_lane_answers(1));
    assert_eq!(lane.card.overall, 1.0);
    assert_eq!(lane.card.label(), Lane::Sidewalk);
}

#[test]
fn test_all_maximum_answers() {
    let life = LifeAssessment::standard().unwrap().assess(&life_answers([5; 15]));
    assert_eq!(life.card.overall, 5.0);
    assert_eq!(life.card.label(), Avatar::Architect);

    let lane = LaneDiagnostic::standard().unwrap().assess(&uniform_lane_answers(5));
    assert_eq!(lane.card.overall, 5.0);
    assert_eq!(lane.card.label(), Lane::Fastlane);
}

#[test]
fn test_empty_submission() {
    let life = LifeAssessment::standard().unwrap().assess(&AnswerSet::new());
    assert!(life.card.category_scores.values().iter().all(|v| *v == 0.0));
    assert_eq!(life.card.overall, 0.0);
    assert_eq!(life.card.label(), Avatar::Drifter);

    let lane = LaneDiagnostic::standard().unwrap().assess(&AnswerSet::new());
    assert_eq!(lane.card.overall, 0.0);
    assert_eq!(lane.card.label(), Lane::Sidewalk);
}

#[test]
fn test_penalized_game_behavior() {
    let factors = ConfidenceFactors {
        avg_answer_ms: 1500.0,
        answer_changes: 6,
        timeouts: 2,
        validation_consistency: 0.5,
    };
    assert_eq!(behavioral_confidence(&factors, &BehavioralPolicy::default()), 20);
}

#[test]
fn test_unknown_questions_are_ignored() {
    let engine = LaneDiagnostic::standard().unwrap();
    let mut answers = uniform_lane_answers(3);
    answers.insert("LD99", 1);
    answers.insert("Q1", 1);
    let report = engine.assess(&answers);
    assert_eq!(report.card.overall, 3.0);
    assert_eq!(report.card.category_scores.get(LaneCategory::RiskOpportunity), 3.0);
}

#[test]
fn test_game_session_end_to_end() {
    let engine = LaneGame::standard().unwrap();
    let session = GameSession {
        id: "session-1".to_string(),
        started_at: 1_700_000_000_000,
        completed_at: Some(1_700_000_300_000),
        question_order: (1..=18).map(|n| format!("LD{}", n)).collect(),
        consistency_score: 0.85,
        avg_answer_ms: 4500.0,
        timeouts: 1,
    };
    let events: Vec<GameEvent> = (1..=18)
        .map(|n| GameEvent {
            question_id: format!("LD{}", n),
            q_index: n - 1,
            answer: if n == 18 { None } else { Some(4) },
            duration_ms: 4500,
            timed_out: n == 18,
            changed_answer: n <= 3,
        })
        .collect();

    let report = engine.assess(&session, &events);
    // systems_scalability averages LD14-17 only
    assert_eq!(report.card.overall, 4.0);
    assert_eq!(report.lane(), Lane::Fastlane);
    // 100 - 10 (hurried) - 8 (three revisions) - 10 (one timeout)
    assert_eq!(report.confidence, 72);
    // closing answers 4, 4, missing -> 8 / 3 < 4
    let codes: Vec<&str> = report.badges.iter().map(|b| b.code()).collect();
    assert_eq!(codes, vec!["SKY_PILOT", "HONEST_SIGNAL"]);
}
