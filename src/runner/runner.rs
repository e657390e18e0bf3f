// src/runner/runner.rs
use super::result::{CheckResult, RunReport};
use crate::checks::{Check, CheckOutcome};
use crate::metrics::{MetricsCollector, Timer};
use crate::report::{ReportError, Reporter};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Runs registered checks one after another and collects exactly one result per check.
pub struct CheckRunner {
    target: String,
    checks: Vec<Arc<dyn Check>>,
    metrics: Option<Arc<MetricsCollector>>,
}

impl CheckRunner {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            checks: Vec::new(),
            metrics: None,
        }
    }

    pub fn register(mut self, check: Arc<dyn Check>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Arc<dyn Check>>) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Only reporter output failures abort the run; check failures never do.
    pub async fn run(&self, reporter: &mut dyn Reporter) -> Result<RunReport, ReportError> {
        let started_at = Utc::now();
        reporter.suite_started(&self.target, started_at)?;
        info!("Running {} checks against {}", self.checks.len(), self.target);

        let mut results = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            let name = check.name().to_string();
            reporter.check_started(&name)?;

            let timer = Timer::new();
            let (passed, detail) = execute(check.clone()).await;
            let elapsed = timer.elapsed();

            if let Some(metrics) = &self.metrics {
                metrics.record_check(&name, passed, elapsed);
            }

            let result = CheckResult {
                name,
                passed,
                detail,
                duration_ms: elapsed.as_millis() as u64,
                finished_at: Utc::now(),
            };
            reporter.check_finished(&result)?;
            results.push(result);
        }

        let report = RunReport {
            target: self.target.clone(),
            started_at,
            results,
        };

        let summary = report.summary();
        if let Some(metrics) = &self.metrics {
            metrics.record_run(summary.passed, summary.total);
        }
        info!(
            "Run complete: {} passed, {} failed",
            summary.passed,
            summary.failed()
        );

        reporter.suite_finished(&report)?;
        Ok(report)
    }
}

/// Runs one check in its own task so that an error or a panic is contained to that check.
async fn execute(check: Arc<dyn Check>) -> (bool, Option<String>) {
    let name = check.name().to_string();
    let task = tokio::spawn(async move { check.run().await });

    match task.await {
        Ok(Ok(outcome)) => {
            debug!("Check '{}' finished: {:?}", name, outcome);
            let passed = outcome.is_pass();
            let detail = match outcome {
                CheckOutcome::Pass { detail } => detail,
                CheckOutcome::Fail { reason } => Some(reason),
            };
            (passed, detail)
        }
        Ok(Err(e)) => {
            warn!("Check '{}' failed: {}", name, e);
            (false, Some(e.to_string()))
        }
        Err(e) => {
            error!("Check '{}' aborted: {}", name, e);
            (false, Some(format!("Test execution error: {}", e)))
        }
    }
}
