// src/runner/mod.rs
mod result;
#[allow(clippy::module_inception)]
mod runner;

pub use result::{CheckResult, RunReport, RunSummary};
pub use runner::CheckRunner;
