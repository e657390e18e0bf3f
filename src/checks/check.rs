// src/checks/check.rs
use crate::client::ProbeError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::Serialize;
use std::future::Future;

/// Result of a check that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    Pass { detail: Option<String> },
    Fail { reason: String },
}

impl CheckOutcome {
    pub fn pass(detail: impl Into<String>) -> Self {
        CheckOutcome::Pass {
            detail: Some(detail.into()),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        CheckOutcome::Fail {
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass { .. })
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            CheckOutcome::Pass { detail } => detail.as_deref(),
            CheckOutcome::Fail { reason } => Some(reason),
        }
    }
}

impl From<bool> for CheckOutcome {
    fn from(passed: bool) -> Self {
        if passed {
            CheckOutcome::Pass { detail: None }
        } else {
            CheckOutcome::Fail {
                reason: "check returned false".to_string(),
            }
        }
    }
}

/// A named, independent verification step against the remote service.
#[async_trait]
pub trait Check: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> Result<CheckOutcome, ProbeError>;
}

type CheckFn = dyn Fn() -> BoxFuture<'static, Result<CheckOutcome, ProbeError>> + Send + Sync;

/// A check built from a name and an async closure.
pub struct FnCheck {
    name: String,
    f: Box<CheckFn>,
}

#[async_trait]
impl Check for FnCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<CheckOutcome, ProbeError> {
        (self.f)().await
    }
}

pub fn check_fn<F, Fut>(name: impl Into<String>, f: F) -> FnCheck
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CheckOutcome, ProbeError>> + Send + 'static,
{
    FnCheck {
        name: name.into(),
        f: Box::new(move || Box::pin(f())),
    }
}
