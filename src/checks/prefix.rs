// src/checks/prefix.rs
use super::health::is_greeting;
use super::{Check, CheckOutcome};
use crate::client::{ApiClient, ProbeError};
use crate::config::{HealthConfig, PrefixPolicy};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Verifies that the API is only reachable under its prefix.
pub struct PrefixCheck {
    client: ApiClient,
    policy: PrefixPolicy,
    health: HealthConfig,
}

impl PrefixCheck {
    pub fn new(client: ApiClient, policy: PrefixPolicy, health: HealthConfig) -> Self {
        Self {
            client,
            policy,
            health,
        }
    }

    fn is_api_payload(&self, body: &str) -> bool {
        serde_json::from_str::<Value>(body)
            .map(|v| is_greeting(&v, &self.health.expected_field, &self.health.expected_value))
            .unwrap_or(false)
    }

    async fn run_strict(&self) -> Result<CheckOutcome, ProbeError> {
        let url = self.client.root_url()?;

        match self.client.get(url).await {
            Ok(response) if response.status == StatusCode::NOT_FOUND => Ok(CheckOutcome::pass(
                "Routes properly require the API prefix",
            )),
            Ok(response) => Ok(CheckOutcome::fail(format!(
                "Route accessible without the API prefix: {}",
                response.status.as_u16()
            ))),
            // An unprefixed root that does not answer at all is protected too.
            Err(err) if err.is_connectivity() => Ok(CheckOutcome::pass(format!(
                "Routes properly protected (connection error expected): {}",
                err
            ))),
            Err(err) => Err(err),
        }
    }

    async fn run_split_ui(&self) -> Result<CheckOutcome, ProbeError> {
        let root = self.client.get(self.client.root_url()?).await?.require_success()?;
        if self.is_api_payload(&root.body) {
            return Ok(CheckOutcome::fail(
                "Unprefixed root serves the API payload instead of the UI",
            ));
        }
        debug!(
            "root content-type: {}",
            root.header("content-type").unwrap_or("unknown")
        );

        let api = self
            .client
            .get(self.client.api_url("/")?)
            .await?
            .require_success()?;
        if !self.is_api_payload(&api.body) {
            return Ok(CheckOutcome::fail(format!(
                "Prefixed root does not serve the API payload: {}",
                api.body
            )));
        }

        Ok(CheckOutcome::pass(
            "Root serves the UI document, prefixed root serves the API",
        ))
    }
}

#[async_trait]
impl Check for PrefixCheck {
    fn name(&self) -> &str {
        "API Prefix Verification"
    }

    async fn run(&self) -> Result<CheckOutcome, ProbeError> {
        match self.policy {
            PrefixPolicy::Strict => self.run_strict().await,
            PrefixPolicy::SplitUi => self.run_split_ui().await,
        }
    }
}
