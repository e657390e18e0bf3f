// src/lib.rs
pub mod checks;
pub mod cli;
pub mod client;
pub mod config;
pub mod metrics;
pub mod report;
pub mod runner;
