use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{FileOutcome, RunSummary};

/// Machine-readable record of a conversion run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub target_size: u32,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(summary: &RunSummary, input_dir: &Path, output_dir: &Path, target_size: u32) -> Self {
        Self {
            generated_at: Utc::now(),
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            target_size,
            converted: summary.converted(),
            skipped: summary.skipped(),
            failed: summary.failed(),
            files: summary.outcomes.clone(),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}
