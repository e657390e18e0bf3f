// src/main.rs
use anyhow::Result;
use clap::Parser;
use smoke_runner::{
    checks::default_suite,
    cli::Cli,
    client::ApiClient,
    metrics::MetricsRegistry,
    report::reporter_for,
    runner::CheckRunner,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr, the report owns stdout
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("smoke_runner=info".parse().expect("static directive"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = cli.resolve_config().await?;

    let client = ApiClient::new(&config.target)?;
    let metrics = MetricsRegistry::new()?;

    let target = client.api_url("")?.to_string();
    let runner = CheckRunner::new(target)
        .with_checks(default_suite(&config, &client))
        .with_metrics(metrics.collector());

    let mut reporter = reporter_for(config.output.format, std::io::stdout());
    let report = runner.run(reporter.as_mut()).await?;

    if let Some(path) = &config.metrics.textfile {
        metrics.write_textfile(path).await?;
    }

    Ok(report.summary().all_passed())
}
