// src/metrics/collector.rs
use anyhow::{Context, Result};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct MetricsRegistry {
    registry: Registry,
    collector: Arc<MetricsCollector>,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let collector = Arc::new(MetricsCollector::new(&registry)?);

        Ok(Self {
            registry,
            collector,
        })
    }

    pub fn collector(&self) -> Arc<MetricsCollector> {
        self.collector.clone()
    }

    pub fn gather(&self) -> Result<Vec<u8>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes the exposition in node-exporter textfile format.
    pub async fn write_textfile(&self, path: &Path) -> Result<()> {
        let buffer = self.gather()?;
        tokio::fs::write(path, buffer)
            .await
            .with_context(|| format!("Failed to write metrics to {}", path.display()))?;
        tracing::info!("Metrics written to {}", path.display());
        Ok(())
    }
}

pub struct MetricsCollector {
    // Per-check metrics
    pub checks_total: IntCounterVec,
    pub check_duration_seconds: HistogramVec,

    // Run metrics
    pub run_checks_passed: IntGauge,
    pub run_checks_total: IntGauge,
    pub run_success: IntGauge,
}

impl MetricsCollector {
    pub fn new(registry: &Registry) -> Result<Self> {
        let checks_total = IntCounterVec::new(
            Opts::new("smoke_checks_total", "Checks executed, by outcome"),
            &["check", "outcome"],
        )?;
        registry.register(Box::new(checks_total.clone()))?;

        let check_duration_seconds = HistogramVec::new(
            HistogramOpts::new("smoke_check_duration_seconds", "Check duration in seconds"),
            &["check"],
        )?;
        registry.register(Box::new(check_duration_seconds.clone()))?;

        let run_checks_passed =
            IntGauge::new("smoke_run_checks_passed", "Checks passed in the last run")?;
        registry.register(Box::new(run_checks_passed.clone()))?;

        let run_checks_total =
            IntGauge::new("smoke_run_checks_total", "Checks executed in the last run")?;
        registry.register(Box::new(run_checks_total.clone()))?;

        let run_success = IntGauge::new(
            "smoke_run_success",
            "Whether every check passed in the last run (1=yes, 0=no)",
        )?;
        registry.register(Box::new(run_success.clone()))?;

        Ok(Self {
            checks_total,
            check_duration_seconds,
            run_checks_passed,
            run_checks_total,
            run_success,
        })
    }

    pub fn record_check(&self, check: &str, passed: bool, duration: Duration) {
        let outcome = if passed { "pass" } else { "fail" };
        self.checks_total
            .with_label_values(&[check, outcome])
            .inc();

        self.check_duration_seconds
            .with_label_values(&[check])
            .observe(duration.as_secs_f64());
    }

    pub fn record_run(&self, passed: usize, total: usize) {
        self.run_checks_passed.set(passed as i64);
        self.run_checks_total.set(total as i64);
        self.run_success.set(if passed == total { 1 } else { 0 });
    }
}

// Helper for timing operations
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
