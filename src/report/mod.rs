// src/report/mod.rs
mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use crate::config::OutputFormat;
use crate::runner::{CheckResult, RunReport};
use chrono::{DateTime, Utc};
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receives run progress in execution order.
pub trait Reporter: Send {
    fn suite_started(&mut self, target: &str, at: DateTime<Utc>) -> Result<(), ReportError>;

    fn check_started(&mut self, name: &str) -> Result<(), ReportError>;

    fn check_finished(&mut self, result: &CheckResult) -> Result<(), ReportError>;

    fn suite_finished(&mut self, report: &RunReport) -> Result<(), ReportError>;
}

pub fn reporter_for<W>(format: OutputFormat, out: W) -> Box<dyn Reporter>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(out)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    }
}
