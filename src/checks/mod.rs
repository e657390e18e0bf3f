// src/checks/mod.rs
mod check;
mod cors;
mod health;
mod lifecycle;
mod prefix;
mod validation;

pub use check::{check_fn, Check, CheckOutcome, FnCheck};
pub use cors::CorsCheck;
pub use health::HealthCheck;
pub use lifecycle::StatusLifecycleCheck;
pub use prefix::PrefixCheck;
pub use validation::MalformedInputCheck;

use crate::client::ApiClient;
use crate::config::RunnerConfig;
use std::sync::Arc;

/// The standard suite, in execution order.
pub fn default_suite(config: &RunnerConfig, client: &ApiClient) -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(HealthCheck::new(client.clone(), config.health.clone())),
        Arc::new(StatusLifecycleCheck::new(
            client.clone(),
            config.lifecycle.client_name_prefix.clone(),
        )),
        Arc::new(CorsCheck::new(
            client.clone(),
            config.policy.cors,
            config.policy.origin.clone(),
        )),
        Arc::new(PrefixCheck::new(
            client.clone(),
            config.policy.prefix,
            config.health.clone(),
        )),
        Arc::new(MalformedInputCheck::new(client.clone())),
    ]
}
