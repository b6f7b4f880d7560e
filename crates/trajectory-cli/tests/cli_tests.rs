//! Integration tests for trajectory-cli
//!
//! Commands driven end to end against files in a temporary directory.

use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use trajectory_cli::cli::{
    ConfigAction, ConfigArgs, GameArgs, HistoryArgs, ScoreArgs, ScoreVariant, ValidateArgs,
};
use trajectory_cli::commands;
use trajectory_cli::config::OutputFormat;
use trajectory_cli::{CliError, Config, Formatter, JsonlStore};
use trajectory_gatekeeper::GatekeeperError;

fn quiet() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path.to_string_lossy().into_owned()
}

fn score_args(variant: ScoreVariant, answers: String) -> ScoreArgs {
    ScoreArgs {
        variant,
        answers,
        tables: None,
        questions: None,
        strict: false,
        save: None,
        module: None,
    }
}

fn life_submission(values: [u8; 15]) -> serde_json::Value {
    let answers: serde_json::Map<String, serde_json::Value> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("Q{}", i + 1), json!(v)))
        .collect();
    json!({ "answers": answers, "reflective": { "R1": "Sleep more" } })
}

fn uniform_lane_submission(value: u8) -> serde_json::Value {
    let answers: serde_json::Map<String, serde_json::Value> =
        (1..=18).map(|n| (format!("LD{}", n), json!(value))).collect();
    serde_json::Value::Object(answers)
}

#[test]
fn test_score_life_and_save() {
    let dir = TempDir::new().unwrap();
    let answers = write_json(
        dir.path(),
        "life.json",
        life_submission([5, 5, 5, 1, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3]),
    );
    let store = dir.path().join("results.jsonl");

    let mut args = score_args(ScoreVariant::Life, answers);
    args.save = Some(store.clone());
    args.module = Some("ktb".to_string());
    commands::execute_score(args, &Config::default(), &quiet()).unwrap();

    let records = JsonlStore::new(&store).records().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["module_id"], "ktb");
    assert_eq!(record["answers"]["Q4"], 1);
    assert_eq!(record["report"]["kind"], "life");
    assert_eq!(record["report"]["label"], "Drifter");
    assert_eq!(record["report"]["overall"], 3.0);
    assert_eq!(record["report"]["lowest_two"], json!(["health", "finances"]));
}

#[test]
fn test_module_defaults_to_config() {
    let dir = TempDir::new().unwrap();
    let answers = write_json(dir.path(), "lane.json", uniform_lane_submission(3));
    let store = dir.path().join("results.jsonl");

    let mut config = Config::default();
    config.settings.module_id = "lane-module".to_string();
    let mut args = score_args(ScoreVariant::Lane, answers);
    args.save = Some(store.clone());
    commands::execute_score(args, &config, &quiet()).unwrap();

    let records = JsonlStore::new(&store).records().unwrap();
    assert_eq!(records[0]["module_id"], "lane-module");
    assert_eq!(records[0]["report"]["kind"], "lane-diagnostic");
    assert_eq!(records[0]["report"]["label"], "slowlane");
}

#[test]
fn test_out_of_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    let answers = write_json(dir.path(), "lane.json", json!({ "LD1": 6, "LD2": 3 }));

    let result = commands::execute_score(score_args(ScoreVariant::Lane, answers), &Config::default(), &quiet());
    match result {
        Err(CliError::Gatekeeper(GatekeeperError::Rejected { reasons })) => assert_eq!(reasons.len(), 1),
        other => panic!("Expected rejection, got {:?}", other),
    }
}

#[test]
fn test_strict_rejects_partial_submission() {
    let dir = TempDir::new().unwrap();
    let answers = write_json(dir.path(), "life.json", json!({ "Q1": 4, "Q2": 4, "Q3": 4 }));

    let mut args = score_args(ScoreVariant::Life, answers.clone());
    args.strict = true;
    let result = commands::execute_score(args, &Config::default(), &quiet());
    match result {
        Err(CliError::Gatekeeper(GatekeeperError::Rejected { reasons })) => assert_eq!(reasons.len(), 12),
        other => panic!("Expected rejection, got {:?}", other),
    }

    // the default intake scores partial submissions
    commands::execute_score(score_args(ScoreVariant::Life, answers), &Config::default(), &quiet()).unwrap();
}

#[test]
fn test_table_file_from_config() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("lane.toml");
    std::fs::write(
        &tables,
        r#"
        overrides = []

        [[bands]]
        label = "sidewalk"
        min = 1.0
        max = 3.4
        [[bands]]
        label = "slowlane"
        min = 3.5
        max = 4.4
        [[bands]]
        label = "fastlane"
        min = 4.5
        max = 5.0
        "#,
    )
    .unwrap();
    let answers = write_json(dir.path(), "lane.json", uniform_lane_submission(4));
    let store = dir.path().join("results.jsonl");

    let mut config = Config::default();
    config.tables.lane = Some(tables);
    let mut args = score_args(ScoreVariant::Lane, answers);
    args.save = Some(store.clone());
    commands::execute_score(args, &config, &quiet()).unwrap();

    let records = JsonlStore::new(&store).records().unwrap();
    assert_eq!(records[0]["report"]["label"], "slowlane");
    assert!(records[0]["report"]["forced_by"].is_null());
}

#[test]
fn test_defective_table_file_fails() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("lane.toml");
    std::fs::write(&tables, "[weights]\nfinancial_mindset = 0.9\ntime_freedom = 0.9").unwrap();
    let answers = write_json(dir.path(), "lane.json", uniform_lane_submission(4));

    let mut args = score_args(ScoreVariant::Lane, answers);
    args.tables = Some(tables);
    let result = commands::execute_score(args, &Config::default(), &quiet());
    assert!(matches!(result, Err(CliError::Tables(_))));
}

#[test]
fn test_game_session() {
    let dir = TempDir::new().unwrap();
    let events: Vec<serde_json::Value> = (1..=18)
        .map(|n| {
            json!({
                "question_id": format!("LD{}", n),
                "q_index": n - 1,
                "answer": 4,
                "duration_ms": 6000,
            })
        })
        .collect();
    let session = write_json(
        dir.path(),
        "session.json",
        json!({
            "session": {
                "id": "s-1",
                "started_at": 1_700_000_000_000u64,
                "completed_at": 1_700_000_120_000u64,
                "consistency_score": 0.95,
                "avg_answer_ms": 6000.0,
            },
            "events": events,
        }),
    );
    let store = dir.path().join("game.jsonl");

    let args = GameArgs {
        session,
        tables: None,
        save: Some(store.clone()),
        module: None,
    };
    commands::execute_game(args, &Config::default(), &quiet()).unwrap();

    let records = JsonlStore::new(&store).records().unwrap();
    let report = &records[0]["report"];
    assert_eq!(report["kind"], "lane-game");
    assert_eq!(report["label"], "fastlane");
    assert_eq!(report["behavioral_confidence"], 100);
    assert_eq!(
        report["badges"],
        json!(["SKY_PILOT", "FIRST_INSTINCT", "STEADY_CLIMB", "HONEST_SIGNAL", "CLOSER_90"])
    );
    assert_eq!(records[0]["answers"].as_object().unwrap().len(), 18);
}

#[test]
fn test_invalid_game_session_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let events: Vec<serde_json::Value> = (1..=18)
        .map(|n| {
            json!({
                "question_id": format!("LD{}", n),
                "q_index": n - 1,
                "answer": 9,
                "duration_ms": 6000,
            })
        })
        .collect();
    let session = write_json(
        dir.path(),
        "session.json",
        json!({
            "session": {
                "id": "s-2",
                "started_at": 1_700_000_000_000u64,
                "completed_at": 1_700_000_120_000u64,
                "consistency_score": 3.0,
                "avg_answer_ms": 6000.0,
            },
            "events": events,
        }),
    );
    let store = dir.path().join("game.jsonl");

    let args = GameArgs {
        session,
        tables: None,
        save: Some(store.clone()),
        module: None,
    };
    match commands::execute_game(args, &Config::default(), &quiet()) {
        Err(CliError::Gatekeeper(GatekeeperError::Rejected { reasons })) => assert_eq!(reasons.len(), 19),
        other => panic!("Expected rejection, got {:?}", other),
    }
    assert!(JsonlStore::new(&store).records().unwrap().is_empty());
}

#[test]
fn test_validate_questions() {
    let dir = TempDir::new().unwrap();
    let scored: Vec<serde_json::Value> = (1..=18)
        .map(|n| {
            json!({
                "id": format!("LD{}", n),
                "domain": "time_freedom",
                "prompt": format!("Statement {}", n),
            })
        })
        .collect();
    let valid = write_json(
        dir.path(),
        "lane-bank.json",
        json!({ "metadata": { "domains": ["time_freedom"] }, "scored": scored }),
    );
    let args = ValidateArgs {
        file: PathBuf::from(&valid),
        variant: ScoreVariant::Lane,
        scored: None,
        reflective: None,
        permissive: false,
    };
    commands::execute_validate(args, &quiet()).unwrap();

    // the same bank holds the wrong categories and counts for the life assessment
    let args = ValidateArgs {
        file: PathBuf::from(&valid),
        variant: ScoreVariant::Life,
        scored: None,
        reflective: None,
        permissive: false,
    };
    assert!(matches!(
        commands::execute_validate(args, &quiet()),
        Err(CliError::InvalidInput(_))
    ));
}

#[test]
fn test_history_of_missing_store() {
    let dir = TempDir::new().unwrap();
    let args = HistoryArgs {
        store: dir.path().join("none.jsonl"),
        module: Some("ktb".to_string()),
        limit: Some(5),
    };
    commands::execute_history(args, &Formatter::new(OutputFormat::Table, false)).unwrap();
}

#[test]
fn test_config_init() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trajectory").join("config.toml");
    let init = |force| ConfigArgs {
        action: ConfigAction::Init { force },
    };

    commands::execute_config(init(false), &Config::default(), Some(path.as_path()), &quiet()).unwrap();
    assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());

    assert!(matches!(
        commands::execute_config(init(false), &Config::default(), Some(path.as_path()), &quiet()),
        Err(CliError::Config(_))
    ));
    commands::execute_config(init(true), &Config::default(), Some(path.as_path()), &quiet()).unwrap();
}
