//! healthprobe - bounded-concurrency URL health checker

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use healthprobe::cli::Cli;
use healthprobe::{
    budget, source, HealthReport, Job, OrchestratorBuilder, Probe, Prober, ReportSender,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let config = cli.run_config();
    config.validate()?;

    // Fatal before any probing: no job list, no run
    let targets = source::read_targets(&config.source_path)?;

    // Fatal before any probing: without a token the report cannot be sent
    let http = reqwest::Client::new();
    let access_token = cli.token_exchange().fetch_access_token(&http).await?;

    let workers = budget::effective_workers(config.max_workers, budget::fd_ceiling());
    tracing::info!(
        configured = config.max_workers,
        effective = workers,
        "concurrency budget computed"
    );

    let prober = Arc::new(Prober::new(config.request_timeout()).context("cannot build prober")?);
    let orchestrator = OrchestratorBuilder::new()
        .workers(workers)
        .prober(prober as Arc<dyn Probe>)
        .build()?;

    let jobs: Vec<Job> = targets.into_iter().map(Job::new).collect();
    let (aggregate, interrupted) = orchestrator.run_with_signal_handling(jobs).await?;

    println!("Checked websites: {}", aggregate.total());
    println!("Successful websites: {}", aggregate.success);
    println!("Failure websites: {}", aggregate.failure);
    println!(
        "Total time to finish checking: {:.3}s",
        aggregate.elapsed.as_secs_f64()
    );

    if interrupted {
        tracing::warn!("run interrupted, skipping report");
        return Ok(());
    }

    let sender = ReportSender::new(config.report_url.clone(), access_token);
    let status = sender
        .send(&HealthReport::from_aggregate(&aggregate))
        .await?;
    if !status.is_success() {
        anyhow::bail!("report endpoint returned {status}");
    }

    Ok(())
}
