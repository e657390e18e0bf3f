// src/checks/validation.rs
use super::{Check, CheckOutcome};
use crate::client::{ApiClient, ProbeError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

/// Submits a status record without `client_name`; the service must reject it.
pub struct MalformedInputCheck {
    client: ApiClient,
}

impl MalformedInputCheck {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Check for MalformedInputCheck {
    fn name(&self) -> &str {
        "Error Handling"
    }

    async fn run(&self) -> Result<CheckOutcome, ProbeError> {
        let url = self.client.api_url("/status")?;
        let response = self
            .client
            .post_json(url, &json!({ "invalid_field": "test" }))
            .await?;

        match response.status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Ok(CheckOutcome::pass(
                format!("Properly rejected invalid request: {}", response.status.as_u16()),
            )),
            status => Ok(CheckOutcome::fail(format!(
                "Unexpected response to invalid request: {}",
                status.as_u16()
            ))),
        }
    }
}
