use crate::SyncCycle;
use mastoblock_core::{Result, SyncError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Background job running a [`SyncCycle`] on a fixed interval.
///
/// Cycles run inline in the job's loop, so two cycles never overlap; ticks
/// that pass while a cycle is running are skipped. Shutdown is only observed
/// between cycles.
pub struct SyncJob {
    cycle: SyncCycle,
    interval: Duration,
    run_at_start: bool,
    shutdown: CancellationToken,
}

impl SyncJob {
    /// Create a job that runs immediately and then every `interval`.
    ///
    /// A zero `interval` is rejected with [`SyncError::Config`].
    pub fn new(cycle: SyncCycle, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(SyncError::Config(
                "sync interval must be greater than zero".into(),
            ));
        }

        Ok(Self {
            cycle,
            interval,
            run_at_start: true,
            shutdown: CancellationToken::new(),
        })
    }

    pub const fn with_run_at_start(mut self, run_at_start: bool) -> Self {
        self.run_at_start = run_at_start;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawn the job onto the runtime
    pub fn start(self) -> SyncJobHandle {
        info!(
            interval = ?self.interval,
            run_at_start = self.run_at_start,
            "Starting synchronization worker"
        );

        let shutdown = self.shutdown.clone();
        let task = tokio::spawn(self.run());
        SyncJobHandle { shutdown, task }
    }

    async fn run(self) {
        let first = if self.run_at_start {
            Instant::now()
        } else {
            Instant::now() + self.interval
        };
        let mut ticker = tokio::time::interval_at(first, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                () = self.shutdown.cancelled() => {
                    info!("SyncJob: shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.cycle.run().await {
                        error!(error = %e, "Could not sync data");
                    }
                }
            }
        }
    }
}

/// Handle to a running [`SyncJob`]
pub struct SyncJobHandle {
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl SyncJobHandle {
    /// Stop the job, waiting for an in-flight cycle to finish
    pub async fn stop(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            warn!(error = %e, "SyncJob task ended abnormally");
        }
    }

    /// Returns true once the job's loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
