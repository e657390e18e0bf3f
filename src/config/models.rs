// src/config/models.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub target: TargetConfig,
    pub health: HealthConfig,
    pub lifecycle: LifecycleConfig,
    pub policy: PolicyConfig,
    pub output: OutputConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unsupported base URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("base URL must not carry a query or fragment: {0}")]
    BaseUrlHasQuery(String),

    #[error("API prefix must start with '/' and name a path segment, got '{0}'")]
    InvalidPrefix(String),

    #[error("base URL {url} already ends with the API prefix '{prefix}'; pass the origin only")]
    BaseUrlHasPrefix { url: String, prefix: String },

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("health.expected_field must not be empty")]
    EmptyHealthField,
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target.validate()?;

        if self.health.expected_field.trim().is_empty() {
            return Err(ConfigError::EmptyHealthField);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Origin of the deployment, without the API prefix.
    pub base_url: Url,
    pub api_prefix: String,
    pub timeout_secs: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8000").expect("static URL is valid"),
            api_prefix: "/api".to_string(),
            timeout_secs: 10,
        }
    }
}

impl TargetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Prefix with a single leading slash and no trailing slash.
    pub fn normalized_prefix(&self) -> String {
        format!("/{}", self.api_prefix.trim_matches('/'))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        if self.base_url.query().is_some() || self.base_url.fragment().is_some() {
            return Err(ConfigError::BaseUrlHasQuery(self.base_url.to_string()));
        }

        if !self.api_prefix.starts_with('/') || self.api_prefix.trim_matches('/').is_empty() {
            return Err(ConfigError::InvalidPrefix(self.api_prefix.clone()));
        }

        let prefix = self.normalized_prefix();
        if self.base_url.path().trim_end_matches('/').ends_with(&prefix) {
            return Err(ConfigError::BaseUrlHasPrefix {
                url: self.base_url.to_string(),
                prefix,
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub expected_field: String,
    pub expected_value: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            expected_field: "message".to_string(),
            expected_value: "Hello World".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub client_name_prefix: String,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            client_name_prefix: "test_vehicle".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub cors: CorsPolicy,
    /// Origin header sent by the CORS probe, if any.
    pub origin: Option<String>,
    pub prefix: PrefixPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum CorsPolicy {
    /// Require an `Access-Control-Allow-Origin` response header.
    #[default]
    AllowOriginHeader,
    /// Treat a successful response as permission.
    RequestSucceeds,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// The unprefixed root must 404 or refuse the connection.
    #[default]
    Strict,
    /// The unprefixed root serves a UI document, the prefix serves the API.
    SplitUi,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Prometheus textfile written after the run.
    pub textfile: Option<PathBuf>,
}
