// src/report/json.rs
use super::{ReportError, Reporter};
use crate::runner::{CheckResult, RunReport, RunSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Emits one JSON document once the run is over.
pub struct JsonReporter<W> {
    out: W,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    report: &'a RunReport,
    summary: RunSummary,
    success: bool,
}

impl<W: Write + Send> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn suite_started(&mut self, _target: &str, _at: DateTime<Utc>) -> Result<(), ReportError> {
        Ok(())
    }

    fn check_started(&mut self, _name: &str) -> Result<(), ReportError> {
        Ok(())
    }

    fn check_finished(&mut self, _result: &CheckResult) -> Result<(), ReportError> {
        Ok(())
    }

    fn suite_finished(&mut self, report: &RunReport) -> Result<(), ReportError> {
        let summary = report.summary();
        let document = JsonDocument {
            report,
            summary,
            success: summary.all_passed(),
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
