// src/client/mod.rs
mod error;

pub use error::ProbeError;

use crate::config::TargetConfig;
use reqwest::header::{HeaderMap, ORIGIN};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Thin wrapper over one `reqwest::Client` that knows where the API lives.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    prefix: String,
}

/// Everything a check needs from a response, with the body already read.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ProbeResponse {
    pub fn json(&self) -> Result<Value, ProbeError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Fails with the observed status and body unless the status is 2xx.
    pub fn require_success(self) -> Result<Self, ProbeError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ProbeError::UnexpectedStatus {
                status: self.status,
                body: self.body,
            })
        }
    }
}

impl ApiClient {
    pub fn new(target: &TargetConfig) -> Result<Self, ProbeError> {
        let timeout = target.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(ProbeError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: target.base_url.clone(),
            prefix: target.normalized_prefix(),
        })
    }

    /// `path` is relative to the API prefix, e.g. `/` or `/status`.
    pub fn api_url(&self, path: &str) -> Result<Url, ProbeError> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Ok(Url::parse(&format!("{}{}{}", self.origin(), self.prefix, path))?)
    }

    /// The deployment root, outside the API prefix.
    pub fn root_url(&self) -> Result<Url, ProbeError> {
        Ok(Url::parse(&format!("{}/", self.origin()))?)
    }

    fn origin(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub async fn get(&self, url: Url) -> Result<ProbeResponse, ProbeError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    pub async fn get_with_origin(
        &self,
        url: Url,
        origin: Option<&str>,
    ) -> Result<ProbeResponse, ProbeError> {
        let mut request = self.client.get(url.clone());
        if let Some(origin) = origin {
            request = request.header(ORIGIN, origin);
        }
        debug!("GET {} (origin: {:?})", url, origin);
        let response = request.send().await?;
        Self::read(response).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: Url,
        payload: &T,
    ) -> Result<ProbeResponse, ProbeError> {
        debug!("POST {}", url);
        let response = self.client.post(url).json(payload).send().await?;
        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<ProbeResponse, ProbeError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!("-> HTTP {} ({} bytes)", status, body.len());

        Ok(ProbeResponse {
            status,
            headers,
            body,
        })
    }
}
