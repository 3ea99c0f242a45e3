//! Worker pool execution units
//!
//! Each worker is a tokio task running the same loop: **dequeue -> probe ->
//! record -> repeat**. A worker exits when the queue is closed and drained,
//! or when the shutdown broadcast fires. Workers never share state with each
//! other; the shared [`ProbeStats`](crate::stats::ProbeStats) is the only
//! fan-in point.

mod executor;
mod stats;

pub use executor::Worker;
pub use stats::WorkerStats;
