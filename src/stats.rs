//! Run-wide stat aggregation
//!
//! `ProbeStats` is the single accumulation point shared by every worker. The
//! counters are only ever touched through `record_success`/`record_failure`,
//! so no interleaving of workers can lose an increment.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Thread-safe success/failure tally fed by concurrent workers
#[derive(Debug, Default)]
pub struct ProbeStats {
    success: AtomicU64,
    failure: AtomicU64,
}

impl ProbeStats {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful probe
    pub fn record_success(&self) {
        self.success.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one failed probe
    pub fn record_failure(&self) {
        self.failure.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current `(success, failure)` counts
    ///
    /// Taken after the join barrier this reflects every outcome produced.
    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.success.load(Ordering::Relaxed),
            self.failure.load(Ordering::Relaxed),
        )
    }
}

/// Final aggregate for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// Probes that received any HTTP response
    pub success: u64,

    /// Probes that failed at the transport level
    pub failure: u64,

    /// Wall-clock time from pool start to join-barrier completion
    pub elapsed: Duration,
}

impl Aggregate {
    /// Total probes accounted for
    pub fn total(&self) -> u64 {
        self.success + self.failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_stats_start_empty() {
        let stats = ProbeStats::new();
        assert_eq!(stats.snapshot(), (0, 0));
    }

    #[test]
    fn test_stats_record_and_snapshot() {
        let stats = ProbeStats::new();
        stats.record_success();
        stats.record_success();
        stats.record_failure();
        assert_eq!(stats.snapshot(), (2, 1));
    }

    #[test]
    fn test_concurrent_increments_lose_nothing() {
        let stats = Arc::new(ProbeStats::new());
        let threads = 8;
        let per_thread = 1_000u64;

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..per_thread {
                        if i % 2 == 0 {
                            stats.record_success();
                        } else {
                            stats.record_failure();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let (success, failure) = stats.snapshot();
        assert_eq!(success, threads / 2 * per_thread);
        assert_eq!(failure, threads / 2 * per_thread);
        assert_eq!(success + failure, threads * per_thread);
    }

    #[test]
    fn test_aggregate_total() {
        let aggregate = Aggregate {
            success: 10,
            failure: 3,
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(aggregate.total(), 13);
    }
}
