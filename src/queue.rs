//! Job queue between the producer and the worker pool
//!
//! A single producer enqueues every job exactly once, in source order, then
//! closes the channel by dropping the sender. Workers observe the close as
//! "no more work". The buffer size affects throughput only, never the final
//! aggregate.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

/// One unit of work: a single target URL to probe with a GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Target URL
    pub url: String,
}

impl Job {
    /// Create a job for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Receiver half of the job queue, shared by all workers
pub type SharedJobReceiver = Arc<Mutex<mpsc::Receiver<Job>>>;

/// Queue buffer configuration
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Job channel buffer size (producer -> workers)
    pub job_buffer: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { job_buffer: 32 }
    }
}

impl QueueConfig {
    /// Set a custom job buffer size
    pub fn with_job_buffer(mut self, size: usize) -> Self {
        self.job_buffer = size.max(1);
        self
    }
}

/// Build the job channel: one sender for the producer, a shared receiver
/// for the worker pool
pub fn job_channel(config: &QueueConfig) -> (mpsc::Sender<Job>, SharedJobReceiver) {
    let (tx, rx) = mpsc::channel(config.job_buffer);
    (tx, Arc::new(Mutex::new(rx)))
}
