// src/checks/cors.rs
use super::{Check, CheckOutcome};
use crate::client::{ApiClient, ProbeError};
use crate::config::CorsPolicy;
use async_trait::async_trait;

const CORS_HEADERS: [&str; 3] = [
    "access-control-allow-origin",
    "access-control-allow-methods",
    "access-control-allow-headers",
];

pub struct CorsCheck {
    client: ApiClient,
    policy: CorsPolicy,
    origin: Option<String>,
}

impl CorsCheck {
    pub fn new(client: ApiClient, policy: CorsPolicy, origin: Option<String>) -> Self {
        Self {
            client,
            policy,
            origin,
        }
    }
}

#[async_trait]
impl Check for CorsCheck {
    fn name(&self) -> &str {
        "CORS Configuration"
    }

    async fn run(&self) -> Result<CheckOutcome, ProbeError> {
        let url = self.client.api_url("/")?;
        let response = self
            .client
            .get_with_origin(url, self.origin.as_deref())
            .await?;

        match self.policy {
            CorsPolicy::AllowOriginHeader => {
                if response.header(CORS_HEADERS[0]).is_none() {
                    return Ok(CheckOutcome::fail("CORS headers not found"));
                }

                let found: Vec<String> = CORS_HEADERS
                    .iter()
                    .map(|name| format!("{}: {}", name, response.header(name).unwrap_or("-")))
                    .collect();
                Ok(CheckOutcome::pass(format!(
                    "CORS configured: {}",
                    found.join(", ")
                )))
            }
            CorsPolicy::RequestSucceeds => {
                let response = response.require_success()?;
                Ok(CheckOutcome::pass(format!(
                    "Cross-origin request accepted (HTTP {})",
                    response.status.as_u16()
                )))
            }
        }
    }
}
