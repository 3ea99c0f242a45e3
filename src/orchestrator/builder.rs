//! Builder pattern for Orchestrator construction

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::probe::Probe;
use crate::queue::QueueConfig;

use super::executor::Orchestrator;

/// Builder for creating an Orchestrator
///
/// # Example
///
/// ```ignore
/// let orchestrator = OrchestratorBuilder::new()
///     .workers(effective)
///     .prober(prober)
///     .build()?;
/// ```
pub struct OrchestratorBuilder {
    workers: usize,
    prober: Option<Arc<dyn Probe>>,
    queue: QueueConfig,
}

impl OrchestratorBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            workers: 1,
            prober: None,
            queue: QueueConfig::default(),
        }
    }

    /// Set the worker-pool size
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the prober shared by all workers
    pub fn prober(mut self, prober: Arc<dyn Probe>) -> Self {
        self.prober = Some(prober);
        self
    }

    /// Set the queue configuration
    pub fn queue_config(mut self, queue: QueueConfig) -> Self {
        self.queue = queue;
        self
    }

    /// Build the orchestrator
    ///
    /// # Errors
    ///
    /// Returns an error if the prober is not set or the worker count is zero.
    pub fn build(self) -> Result<Orchestrator> {
        let prober = self.prober.ok_or_else(|| Error::missing_config("prober"))?;

        if self.workers == 0 {
            return Err(Error::config("worker count must be at least 1"));
        }

        Ok(Orchestrator::new(self.workers, prober, self.queue))
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
