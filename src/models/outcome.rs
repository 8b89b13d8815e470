use std::fmt;

use serde::Serialize;

use super::ConversionJob;

/// What happened to a single icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeKind {
    /// SVG already present, nothing touched
    Skipped,
    /// Traced, annotated and resized
    Converted {
        /// Tracer output had no vector path, so no background was added
        empty: bool,
    },
    /// Conversion stopped early; partial files were removed
    Failed { reason: String },
}

/// Outcome for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub source: String,
    pub svg: String,
    #[serde(flatten)]
    pub kind: OutcomeKind,
    #[serde(skip)]
    target_size: u32,
}

impl FileOutcome {
    pub fn skipped(job: &ConversionJob) -> Self {
        Self::new(job, OutcomeKind::Skipped, 0)
    }

    pub fn converted(job: &ConversionJob, target_size: u32, empty: bool) -> Self {
        Self::new(job, OutcomeKind::Converted { empty }, target_size)
    }

    pub fn failed(job: &ConversionJob, reason: impl Into<String>) -> Self {
        Self::new(
            job,
            OutcomeKind::Failed {
                reason: reason.into(),
            },
            0,
        )
    }

    fn new(job: &ConversionJob, kind: OutcomeKind, target_size: u32) -> Self {
        Self {
            source: job.source_name(),
            svg: job.svg_name(),
            kind,
            target_size,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.kind, OutcomeKind::Failed { .. })
    }
}

/// Console progress line
impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            OutcomeKind::Skipped => {
                write!(f, "Skipped: {} → {} (already exists)", self.source, self.svg)
            }
            OutcomeKind::Converted { empty: false } => write!(
                f,
                "Converted: {} → {} ({size}x{size} with white background)",
                self.source,
                self.svg,
                size = self.target_size
            ),
            OutcomeKind::Converted { empty: true } => write!(
                f,
                "Converted: {} → {} ({size}x{size}, no paths traced)",
                self.source,
                self.svg,
                size = self.target_size
            ),
            OutcomeKind::Failed { reason } => {
                write!(f, "Failed: {} → {} ({})", self.source, self.svg, reason)
            }
        }
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn converted(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Converted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|k| matches!(k, OutcomeKind::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(FileOutcome::is_failed)
    }

    fn count(&self, pred: impl Fn(&OutcomeKind) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.kind)).count()
    }
}
