//! CLI argument parsing and service startup.

pub mod args;

use anyhow::{Context as _, Result};
use args::Cli;
use clap::Parser;
use mastoblock::{FeedClient, MastodonClient, SyncCycle, SyncJob};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::logging;

/// Run the service.
pub async fn run() -> Result<()> {
    load_env_file()?;
    let cli = Cli::parse();

    // Configuration errors are fatal before anything starts
    let config = Config::try_from(cli)?;

    logging::init(&config).map_err(|e| anyhow::anyhow!("could not set up logging: {e}"))?;

    let cycle = build_cycle(&config)?;

    if config.once {
        let report = cycle.run().await.context("sync cycle failed")?;
        info!(%report, "Single sync cycle finished");
        return Ok(());
    }

    info!(
        interval = %config.task_interval_display(),
        "Starting synchronization worker..."
    );
    let handle = SyncJob::new(cycle, config.task_interval)?
        .with_run_at_start(config.run_at_start)
        .start();

    info!("The application has been started. To stop it press Ctrl-C.");
    shutdown_signal().await;

    info!("Shutdown requested, waiting for the current cycle to finish");
    handle.stop().await;
    info!("Stopped");

    Ok(())
}

/// Load `.env` from the working directory; its values replace variables already set.
///
/// A missing file is fine. A file that cannot be parsed is a configuration error.
fn load_env_file() -> Result<()> {
    match dotenvy::from_path_override(".env") {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("could not load .env"),
    }
}

/// Wire the HTTP clients into a sync cycle.
pub fn build_cycle(config: &Config) -> Result<SyncCycle> {
    let feed = FeedClient::with_timeout(&config.json_url, config.request_timeout)
        .context("invalid JSON_URL")?;

    let instance = MastodonClient::builder(&config.mastodon_base_url, &config.mastodon_access_token)
        .timeout(config.request_timeout)
        .build()
        .context("invalid MASTODON_BASE_URL")?;

    Ok(SyncCycle::new(Arc::new(feed), Arc::new(instance)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Could not listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
