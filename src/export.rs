//! Survey report export
//!
//! The reference kiosk computed answers and then dropped them on the
//! floor; here a completed survey is written through a [`ResultSink`].
//! The bundled [`JsonFileSink`] writes one JSON document per session into
//! the configured directory, using a temp-file-and-persist sequence so a
//! crash mid-write never leaves a truncated report.

use crate::error::{KioskError, Result};
use crate::render::layout::QUESTION_COUNT;
use crate::selection::Choice;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use uuid::Uuid;

/// Answers for one completed kiosk session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurveyReport {
    /// Random identifier for this session
    pub session: Uuid,
    /// Completion time, seconds since the Unix epoch
    pub completed_unix_secs: u64,
    /// One answer per question, 1-3 in question order
    pub answers: Vec<u8>,
}

impl SurveyReport {
    /// Build a report from a completed answer list
    ///
    /// Returns `None` while any question is unanswered; reports are only
    /// ever produced for finished surveys.
    pub fn from_answers(answers: &[Option<Choice>; QUESTION_COUNT]) -> Option<Self> {
        let answers: Vec<u8> = answers
            .iter()
            .map(|a| a.map(Choice::value))
            .collect::<Option<_>>()?;

        let completed_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Some(Self {
            session: Uuid::new_v4(),
            completed_unix_secs,
            answers,
        })
    }
}

/// Destination for completed survey reports
pub trait ResultSink {
    /// Persist one report
    fn write(&mut self, report: &SurveyReport) -> Result<()>;
}

/// Writes one `report-<uuid>.json` per session into a directory
#[derive(Debug)]
pub struct JsonFileSink {
    output_dir: PathBuf,
}

impl JsonFileSink {
    /// Create a sink targeting `output_dir` (created on first write)
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path a given report would be written to
    pub fn report_path(&self, report: &SurveyReport) -> PathBuf {
        self.output_dir.join(format!("report-{}.json", report.session))
    }
}

impl ResultSink for JsonFileSink {
    fn write(&mut self, report: &SurveyReport) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;

        let json = serde_json::to_string_pretty(report)?;
        let path = self.report_path(report);

        let temp = tempfile::NamedTempFile::new_in(&self.output_dir)?;
        std::fs::write(temp.path(), json)?;
        temp.persist(&path)
            .map_err(|e| KioskError::ExportFailed(Box::new(e)))?;

        info!("Survey report written to {}", path.display());
        Ok(())
    }
}

/// In-memory sink for tests and headless runs
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Every report written so far, in order
    pub reports: Vec<SurveyReport>,
}

impl ResultSink for MemorySink {
    fn write(&mut self, report: &SurveyReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}
