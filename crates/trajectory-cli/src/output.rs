//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use trajectory_domain::tables::TABLES_VERSION;
use trajectory_domain::{
    Category, CategoryScores, Composite, ConfidenceFactors, GameReport, Label, Lane, LaneReport,
    LifeReport, Report, ResultRecord, ScoreCard, ScoringProfile, Threshold,
};
use trajectory_gatekeeper::{BankIssue, RejectionReason};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a report of any assessment.
    pub fn format_report(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report_json(report))?),
            OutputFormat::Quiet => Ok(report.label().to_string()),
            OutputFormat::Table => Ok(match report {
                Report::Life(r) => self.life_table(r),
                Report::Lane(r) => self.lane_table(r),
                Report::Game(r) => self.game_table(r),
            }),
        }
    }

    fn life_table(&self, report: &LifeReport) -> String {
        let mut out = self.card_header("Avatar", &report.card);
        out.push('\n');

        let mut builder = Builder::default();
        builder.push_record(["Domain", "Score", "Grade"]);
        for (domain, grade) in &report.domain_labels {
            builder.push_record([
                domain.as_str().to_string(),
                format!("{:.2}", report.card.category_scores.get(*domain)),
                grade.as_str().to_string(),
            ]);
        }
        out.push_str(&render(builder));
        out.push('\n');

        let lowest: Vec<&str> = report.lowest_two.iter().map(|d| d.as_str()).collect();
        out.push_str(&format!("\nFocus areas: {}\n", lowest.join(", ")));
        out.push_str(&bullets("7-day quick wins", &report.actions.seven_day));
        out.push_str(&bullets("30-day transformation", &report.actions.thirty_day));
        out
    }

    fn lane_table(&self, report: &LaneReport) -> String {
        let mut out = self.card_header("Lane", &report.card);
        if let Some(rule) = &report.card.classification.forced_by {
            out.push_str(&format!("\n{}", self.info(&format!("Assigned by override rule '{}'", rule))));
        }
        out.push_str(&format!("\nGrowth potential: {}\n\n", report.growth_potential.as_str()));
        out.push_str(&scores_table(&report.card.category_scores));
        out.push('\n');

        out.push_str(&format!("\n{}\n{}\n", report.description.name, report.description.description));
        let characteristics: Vec<String> = report
            .description
            .characteristics
            .iter()
            .map(|c| c.to_string())
            .collect();
        out.push_str(&bullets("Characteristics", &characteristics));
        out.push_str(&bullets("Next steps", &report.next_steps));
        out
    }

    fn game_table(&self, report: &GameReport) -> String {
        let mut out = format!(
            "Lane: {}  Overall: {:.2}  Confidence: {}/100\n\n",
            self.label_text(report.lane()),
            report.card.overall,
            report.confidence
        );
        out.push_str(&scores_table(&report.card.category_scores));
        out.push('\n');

        let badges: Vec<String> = report.badges.iter().map(|b| b.code().to_string()).collect();
        if badges.is_empty() {
            out.push_str("\nBadges: none\n");
        } else {
            out.push_str(&format!("\nBadges: {}\n", self.colorize(&badges.join(", "), "cyan")));
        }
        out.push_str(&bullets("Next steps", &report.next_steps));
        out
    }

    fn card_header<C: Category, L: Label>(&self, title: &str, card: &ScoreCard<C, L>) -> String {
        format!(
            "{}: {}  Overall: {:.2}  Confidence: {:.2}\n",
            title,
            self.label_text(card.label()),
            card.overall,
            card.confidence
        )
    }

    fn label_text<L: Label>(&self, label: L) -> String {
        let color = match (label.rank(), L::ALL.len()) {
            (0, _) => "red",
            (rank, len) if rank + 1 == len => "green",
            _ => "yellow",
        };
        self.colorize(label.as_str(), color)
    }

    /// Format a behavioral confidence result.
    pub fn format_confidence(&self, factors: &ConfidenceFactors, confidence: u8) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "confidence": confidence,
                "factors": {
                    "avg_answer_ms": factors.avg_answer_ms,
                    "answer_changes": factors.answer_changes,
                    "timeouts": factors.timeouts,
                    "validation_consistency": factors.validation_consistency,
                }
            }))?),
            OutputFormat::Quiet => Ok(confidence.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Factor", "Value"]);
                builder.push_record(["Mean answer time (ms)".to_string(), format!("{:.0}", factors.avg_answer_ms)]);
                builder.push_record(["Answer changes".to_string(), factors.answer_changes.to_string()]);
                builder.push_record(["Timeouts".to_string(), factors.timeouts.to_string()]);
                builder.push_record([
                    "Validation consistency".to_string(),
                    format!("{:.2}", factors.validation_consistency),
                ]);
                Ok(format!("{}\nConfidence: {}/100", render(builder), confidence))
            }
        }
    }

    /// Format a lane transition roadmap.
    pub fn format_roadmap(&self, current: Lane, target: Lane, steps: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "from": current.as_str(),
                "to": target.as_str(),
                "steps": steps,
            }))?),
            OutputFormat::Quiet => Ok(steps.join("\n")),
            OutputFormat::Table => {
                let steps: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
                Ok(bullets(
                    &format!("{} -> {}", self.label_text(current), self.label_text(target)),
                    &steps,
                )
                .trim_start()
                .to_string())
            }
        }
    }

    /// Format question bank validation issues.
    pub fn format_bank_issues(&self, issues: &[BankIssue], scored: usize, reflective: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "valid": issues.is_empty(),
                    "errors": messages,
                }))?)
            }
            OutputFormat::Quiet => Ok(if issues.is_empty() { "valid" } else { "invalid" }.to_string()),
            OutputFormat::Table => {
                if issues.is_empty() {
                    return Ok(self.success(&format!(
                        "Question bank valid ({} scored + {} reflective).",
                        scored, reflective
                    )));
                }
                let mut out = self.error("Validation failed:");
                for issue in issues {
                    out.push_str(&format!("\n- {}", issue));
                }
                Ok(out)
            }
        }
    }

    /// Format submission rejection reasons.
    pub fn format_rejections(&self, reasons: &[RejectionReason]) -> String {
        let mut out = self.error(&format!("Submission rejected ({} reason(s)):", reasons.len()));
        for reason in reasons {
            out.push_str(&format!("\n- {}", reason));
        }
        out
    }

    /// Format the tables of a scoring profile.
    pub fn format_profile<C: Category, L: Label>(&self, profile: &ScoringProfile<C, L>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&profile_json(profile))?),
            OutputFormat::Quiet => Ok(profile.name.clone()),
            OutputFormat::Table => {
                let mut out = format!("Profile: {} (tables {})\n\n", profile.name, TABLES_VERSION);

                let mut bands = Builder::default();
                bands.push_record(["Label", "Min", "Max"]);
                for band in profile.classifier.bands().bands() {
                    bands.push_record([
                        band.label.as_str().to_string(),
                        format!("{:.1}", band.min),
                        format!("{:.1}", band.max),
                    ]);
                }
                out.push_str(&render(bands));
                out.push_str("\n\n");

                let mut categories = Builder::default();
                categories.push_record(["Category", "Questions", "Weight", "Tie-break"]);
                for category in C::ALL {
                    let weight = match &profile.composite {
                        Composite::Mean => "mean".to_string(),
                        Composite::Weighted(table) => format!("{:.2}", table.weight(*category)),
                    };
                    categories.push_record([
                        category.as_str().to_string(),
                        profile.question_map.questions_for(*category).join(" "),
                        weight,
                        (profile.tie_break.rank(*category) + 1).to_string(),
                    ]);
                }
                out.push_str(&render(categories));

                for rule in profile.classifier.overrides() {
                    let conditions: Vec<String> = rule
                        .conditions
                        .iter()
                        .map(|c| match c.threshold {
                            Threshold::AtMost(limit) => format!("{} <= {:.1}", c.category.as_str(), limit),
                            Threshold::AtLeast(limit) => format!("{} >= {:.1}", c.category.as_str(), limit),
                        })
                        .collect();
                    out.push_str(&format!(
                        "\nOverride {}: {} => {}",
                        rule.name,
                        conditions.join(" and "),
                        rule.forced.as_str()
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Format saved result records.
    pub fn format_history(&self, records: &[Value]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Quiet => Ok(records
                .iter()
                .filter_map(|r| r["id"].as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No records found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["ID", "Module", "Kind", "Label", "Overall", "Created"]);
                for record in records {
                    let id = record["id"].as_str().unwrap_or("");
                    builder.push_record([
                        id.chars().take(8).collect::<String>(),
                        record["module_id"].as_str().unwrap_or("").to_string(),
                        record["report"]["kind"].as_str().unwrap_or("").to_string(),
                        record["report"]["label"].as_str().unwrap_or("").to_string(),
                        record["report"]["overall"]
                            .as_f64()
                            .map(|v| format!("{:.2}", v))
                            .unwrap_or_default(),
                        record["created_at"].to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a record saved message.
    pub fn record_saved(&self, record: &ResultRecord, path: &std::path::Path) -> String {
        self.success(&format!("Saved record {} to {}", record.id, path.display()))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn scores_table<C: Category>(scores: &CategoryScores<C>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Score"]);
    for (category, score) in scores.iter() {
        builder.push_record([category.as_str().to_string(), format!("{:.2}", score)]);
    }
    render(builder)
}

fn bullets(title: &str, items: &[String]) -> String {
    let mut out = format!("\n{}:\n", title);
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
    out
}

/// Category scores as a JSON object.
pub fn scores_json<C: Category>(scores: &CategoryScores<C>) -> Value {
    let mut map = Map::new();
    for (category, score) in scores.iter() {
        map.insert(category.as_str().to_string(), json!(score));
    }
    Value::Object(map)
}

fn card_json<C: Category, L: Label>(card: &ScoreCard<C, L>) -> Value {
    let ranking: Vec<&str> = card.ranking.iter().map(|c| c.as_str()).collect();
    json!({
        "category_scores": scores_json(&card.category_scores),
        "overall": card.overall,
        "label": card.label().as_str(),
        "forced_by": card.classification.forced_by,
        "confidence": card.confidence,
        "ranking": ranking,
    })
}

/// A report as JSON, tagged with its kind.
pub fn report_json(report: &Report) -> Value {
    let mut value = match report {
        Report::Life(r) => {
            let mut grades = Map::new();
            for (domain, grade) in &r.domain_labels {
                grades.insert(domain.as_str().to_string(), json!(grade.as_str()));
            }
            let mut value = card_json(&r.card);
            value["lowest_two"] = json!([r.lowest_two[0].as_str(), r.lowest_two[1].as_str()]);
            value["actions"] = json!({
                "seven_day": r.actions.seven_day,
                "thirty_day": r.actions.thirty_day,
            });
            value["domain_labels"] = Value::Object(grades);
            value
        }
        Report::Lane(r) => {
            let mut value = card_json(&r.card);
            value["growth_potential"] = json!(r.growth_potential.as_str());
            value["next_steps"] = json!(r.next_steps);
            value["lane_description"] = json!({
                "name": r.description.name,
                "description": r.description.description,
                "characteristics": r.description.characteristics,
            });
            value
        }
        Report::Game(r) => {
            let badges: Vec<&str> = r.badges.iter().map(|b| b.code()).collect();
            let mut value = card_json(&r.card);
            value["behavioral_confidence"] = json!(r.confidence);
            value["badges"] = json!(badges);
            value["next_steps"] = json!(r.next_steps);
            value
        }
    };
    value["kind"] = json!(report.kind());
    value
}

/// A result record as JSON, the line format of the result store.
pub fn record_json(record: &ResultRecord) -> Value {
    let mut answers = Map::new();
    for (question_id, value) in record.answers.iter() {
        answers.insert(question_id.to_string(), json!(value));
    }
    json!({
        "id": record.id.to_string(),
        "module_id": record.module_id,
        "answers": answers,
        "report": report_json(&record.report),
        "created_at": record.created_at,
    })
}

fn profile_json<C: Category, L: Label>(profile: &ScoringProfile<C, L>) -> Value {
    let mut questions = Map::new();
    for (question_id, category) in profile.question_map.iter() {
        questions.insert(question_id.to_string(), json!(category.as_str()));
    }
    let composite = match &profile.composite {
        Composite::Mean => json!("mean"),
        Composite::Weighted(table) => {
            let mut weights = Map::new();
            for category in C::ALL {
                weights.insert(category.as_str().to_string(), json!(table.weight(*category)));
            }
            json!({ "weighted": weights })
        }
    };
    let bands: Vec<Value> = profile
        .classifier
        .bands()
        .bands()
        .iter()
        .map(|b| json!({ "label": b.label.as_str(), "min": b.min, "max": b.max }))
        .collect();
    let overrides: Vec<Value> = profile
        .classifier
        .overrides()
        .iter()
        .map(|rule| {
            let conditions: Vec<Value> = rule
                .conditions
                .iter()
                .map(|c| match c.threshold {
                    Threshold::AtMost(limit) => json!({ "category": c.category.as_str(), "at_most": limit }),
                    Threshold::AtLeast(limit) => json!({ "category": c.category.as_str(), "at_least": limit }),
                })
                .collect();
            json!({ "name": rule.name, "label": rule.forced.as_str(), "conditions": conditions })
        })
        .collect();
    let tie_break: Vec<&str> = profile.tie_break.as_slice().iter().map(|c| c.as_str()).collect();

    json!({
        "name": profile.name,
        "tables_version": TABLES_VERSION,
        "questions": questions,
        "composite": composite,
        "bands": bands,
        "overrides": overrides,
        "tie_break": tie_break,
    })
}
