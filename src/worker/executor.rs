//! Worker execution loop

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::probe::Probe;
use crate::queue::SharedJobReceiver;
use crate::stats::ProbeStats;

use super::stats::WorkerStats;

/// Worker executes probes in a loop: dequeue -> probe -> record -> repeat
///
/// Workers are stateless tokio tasks managed by the Orchestrator. They share
/// the prober and the stat aggregator via Arc, and pull jobs from the shared
/// queue receiver.
pub struct Worker {
    /// Unique worker identifier
    id: usize,

    /// Prober (shared across workers via Arc)
    prober: Arc<dyn Probe>,

    /// Job queue receiver (shared across workers)
    jobs: SharedJobReceiver,

    /// Run-wide stat aggregator (shared across workers via Arc)
    stats: Arc<ProbeStats>,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: usize,
        prober: Arc<dyn Probe>,
        jobs: SharedJobReceiver,
        stats: Arc<ProbeStats>,
    ) -> Self {
        Self {
            id,
            prober,
            jobs,
            stats,
        }
    }

    /// Run the worker loop
    ///
    /// Returns this worker's local stats once the queue is closed and drained
    /// or the shutdown broadcast fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> WorkerStats {
        let mut stats = WorkerStats::new();
        stats.start();

        tracing::debug!(worker_id = self.id, "worker started");

        loop {
            // The receiver lock is held only across the dequeue, never across
            // the probe itself.
            let job = {
                let mut rx = self.jobs.lock().await;
                tokio::select! {
                    biased;

                    _ = shutdown.recv() => {
                        tracing::debug!(worker_id = self.id, "worker received shutdown signal");
                        break;
                    }

                    job = rx.recv() => match job {
                        Some(job) => job,
                        // Queue closed and drained: no more work
                        None => break,
                    },
                }
            };

            let outcome = self.prober.probe(&job.url).await;
            if outcome.is_success() {
                self.stats.record_success();
                stats.record_success();
            } else {
                self.stats.record_failure();
                stats.record_failure();
            }
        }

        stats.stop();
        tracing::debug!(
            worker_id = self.id,
            completed = stats.completed,
            failed = stats.failed,
            elapsed_ms = ?stats.elapsed().map(|d| d.as_millis()),
            "worker finished"
        );

        stats
    }

    /// Get the worker ID
    pub fn id(&self) -> usize {
        self.id
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").field("id", &self.id).finish()
    }
}
