//! Per-worker statistics tracking

use std::time::{Duration, Instant};

/// Statistics tracked by each worker
///
/// Local bookkeeping for logging; the shared `ProbeStats` aggregator is the
/// authoritative tally.
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Probes that received an HTTP response
    pub completed: u64,

    /// Probes that failed at the transport level
    pub failed: u64,

    /// Worker start time
    pub started_at: Option<Instant>,

    /// Worker end time
    pub ended_at: Option<Instant>,
}

impl WorkerStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking (records start time)
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop tracking (records end time)
    pub fn stop(&mut self) {
        self.ended_at = Some(Instant::now());
    }

    /// Total probes handled by this worker
    pub fn total(&self) -> u64 {
        self.completed + self.failed
    }

    /// Elapsed time since start
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|start| {
            self.ended_at
                .map(|end| end.duration_since(start))
                .unwrap_or_else(|| start.elapsed())
        })
    }

    /// Record a probe that received a response
    pub fn record_success(&mut self) {
        self.completed += 1;
    }

    /// Record a probe that failed
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }
}
