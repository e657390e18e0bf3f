// src/checks/health.rs
use super::{Check, CheckOutcome};
use crate::client::{ApiClient, ProbeError};
use crate::config::HealthConfig;
use async_trait::async_trait;
use serde_json::Value;

/// Liveness probe: the API root must answer with the configured greeting.
pub struct HealthCheck {
    client: ApiClient,
    config: HealthConfig,
}

impl HealthCheck {
    pub fn new(client: ApiClient, config: HealthConfig) -> Self {
        Self { client, config }
    }
}

/// True when `body` is a JSON object whose `field` is the string `expected`.
pub(crate) fn is_greeting(body: &Value, field: &str, expected: &str) -> bool {
    body.get(field).and_then(Value::as_str) == Some(expected)
}

#[async_trait]
impl Check for HealthCheck {
    fn name(&self) -> &str {
        "Server Health Check"
    }

    async fn run(&self) -> Result<CheckOutcome, ProbeError> {
        let url = self.client.api_url("/")?;
        let response = self.client.get(url).await?.require_success()?;
        let data = response.json()?;

        if is_greeting(&data, &self.config.expected_field, &self.config.expected_value) {
            Ok(CheckOutcome::pass(format!(
                "Server responding correctly: {}",
                data
            )))
        } else {
            Ok(CheckOutcome::fail(format!("Unexpected response: {}", data)))
        }
    }
}
