//! Orchestrator execution logic

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;

use crate::error::Result;
use crate::probe::Probe;
use crate::queue::{job_channel, Job, QueueConfig};
use crate::stats::{Aggregate, ProbeStats};
use crate::worker::Worker;

/// Orchestrator manages one health-check run
///
/// Responsible for feeding the job queue, spawning workers, waiting on the
/// join barrier, and reading the final aggregate.
pub struct Orchestrator {
    /// Worker-pool size for this run
    pub(crate) workers: usize,

    /// Prober shared across workers
    pub(crate) prober: Arc<dyn Probe>,

    /// Queue buffer configuration
    pub(crate) queue: QueueConfig,

    /// Shutdown signal sender
    pub(crate) shutdown_tx: broadcast::Sender<()>,
}

impl Orchestrator {
    /// Create a new orchestrator
    ///
    /// Use `OrchestratorBuilder` for a more ergonomic construction.
    pub fn new(workers: usize, prober: Arc<dyn Probe>, queue: QueueConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            workers,
            prober,
            queue,
            shutdown_tx,
        }
    }

    /// Get a shutdown signal receiver
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Trigger shutdown of the producer and all workers
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Number of workers this orchestrator will spawn
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run the health check over the given jobs
    ///
    /// Spawns the producer and worker tasks, waits for every worker to exit,
    /// and returns the final aggregate. The invariant after the join barrier:
    /// `success + failure` equals the number of jobs dequeued.
    pub async fn run(&self, jobs: Vec<Job>) -> Result<Aggregate> {
        let total_jobs = jobs.len();
        let stats = Arc::new(ProbeStats::new());
        let (tx, shared_rx) = job_channel(&self.queue);

        tracing::info!(
            workers = self.workers,
            jobs = total_jobs,
            "starting health-check run"
        );

        let start = Instant::now();

        // Producer: enqueue every job in source order, then close the queue
        // by dropping the sender. Checks for cancellation before each send.
        let mut producer_shutdown = self.shutdown_tx.subscribe();
        let producer = tokio::spawn(async move {
            for job in jobs {
                tokio::select! {
                    biased;

                    _ = producer_shutdown.recv() => {
                        tracing::debug!("producer cancelled, closing queue");
                        break;
                    }

                    sent = tx.send(job) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        let mut handles = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            let worker = Worker::new(
                worker_id,
                Arc::clone(&self.prober),
                Arc::clone(&shared_rx),
                Arc::clone(&stats),
            );
            let shutdown_rx = self.shutdown_tx.subscribe();
            handles.push(tokio::spawn(worker.run(shutdown_rx)));
        }

        // Join barrier: the pool is done when every worker has exited
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(worker_stats) => {
                    tracing::debug!(
                        worker_id,
                        completed = worker_stats.completed,
                        failed = worker_stats.failed,
                        "worker completed"
                    );
                }
                Err(e) => {
                    // The job this worker held is lost; single-pass design
                    tracing::error!(worker_id, error = %e, "worker task panicked");
                }
            }
        }

        let _ = producer.await;

        let elapsed = start.elapsed();
        let (success, failure) = stats.snapshot();
        let aggregate = Aggregate {
            success,
            failure,
            elapsed,
        };

        tracing::info!(
            total = aggregate.total(),
            success,
            failure,
            elapsed_secs = elapsed.as_secs_f64(),
            "health-check run completed"
        );

        Ok(aggregate)
    }

    /// Run with Ctrl+C handling
    ///
    /// An interrupt stops the producer and lets workers exit at their next
    /// dequeue; in-flight probes finish or hit their own timeout. Returns the
    /// aggregate and whether the run was interrupted, so the caller can skip
    /// reporting a partial result.
    pub async fn run_with_signal_handling(&self, jobs: Vec<Job>) -> Result<(Aggregate, bool)> {
        let shutdown_tx = self.shutdown_tx.clone();
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);

        let signal_handle = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("received Ctrl+C, cancelling run");
                    flag.store(true, Ordering::SeqCst);
                    let _ = shutdown_tx.send(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to listen for Ctrl+C");
                }
            }
        });

        let result = self.run(jobs).await;

        signal_handle.abort();

        result.map(|aggregate| (aggregate, interrupted.load(Ordering::SeqCst)))
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("workers", &self.workers)
            .field("queue", &self.queue)
            .finish()
    }
}
