// src/cli.rs
use crate::config::{self, CorsPolicy, OutputFormat, PrefixPolicy, RunnerConfig};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Smoke-test a deployed status-check API and exit non-zero if any check fails.
#[derive(Debug, Parser)]
#[command(name = "smoke-runner", version)]
pub struct Cli {
    /// YAML or JSON configuration file
    pub config: Option<PathBuf>,

    /// Origin of the deployment, e.g. https://preview.example.com
    #[arg(long, env = "SMOKE_BASE_URL")]
    pub base_url: Option<Url>,

    /// Path prefix the API is mounted under
    #[arg(long, env = "SMOKE_API_PREFIX")]
    pub api_prefix: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SMOKE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum)]
    pub cors_policy: Option<CorsPolicy>,

    /// Origin header sent by the CORS check
    #[arg(long)]
    pub origin: Option<String>,

    #[arg(long, value_enum)]
    pub prefix_policy: Option<PrefixPolicy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write Prometheus metrics for the run to this file
    #[arg(long)]
    pub metrics_textfile: Option<PathBuf>,
}

impl Cli {
    /// File (or defaults), then flags, then a single validation pass.
    pub async fn resolve_config(&self) -> Result<RunnerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                config::load_config(path).await?
            }
            None => RunnerConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Flags win over file values.
    pub fn apply(&self, config: &mut RunnerConfig) {
        if let Some(base_url) = &self.base_url {
            config.target.base_url = base_url.clone();
        }
        if let Some(prefix) = &self.api_prefix {
            config.target.api_prefix = prefix.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.target.timeout_secs = timeout;
        }
        if let Some(cors) = self.cors_policy {
            config.policy.cors = cors;
        }
        if let Some(origin) = &self.origin {
            config.policy.origin = Some(origin.clone());
        }
        if let Some(prefix) = self.prefix_policy {
            config.policy.prefix = prefix;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(path) = &self.metrics_textfile {
            config.metrics.textfile = Some(path.clone());
        }
    }
}
