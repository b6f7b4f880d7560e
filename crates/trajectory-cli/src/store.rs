//! Append-only JSON Lines result store.

use crate::error::{CliError, Result};
use crate::output::record_json;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use trajectory_domain::{RecordId, ResultRecord, ResultStore};

/// One JSON document per line, appended in creation order.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Store backed by `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored record as raw JSON, oldest first.
    pub fn records(&self) -> Result<Vec<serde_json::Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(std::fs::File::open(&self.path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}

impl ResultStore for JsonlStore {
    type Error = CliError;

    fn persist(&mut self, record: &ResultRecord) -> Result<RecordId> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(&record_json(record))?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        tracing::info!(id = %record.id, path = %self.path.display(), "result record saved");
        Ok(record.id)
    }
}
