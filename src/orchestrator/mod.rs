//! Run orchestration: queue, pool, join barrier, aggregate
//!
//! The Orchestrator owns the control flow of one run: it feeds the job queue
//! from a producer task, spawns the worker pool, blocks on the join barrier
//! until every worker has drained the queue and exited, and only then reads
//! the final aggregate.

mod builder;
mod executor;

pub use builder::OrchestratorBuilder;
pub use executor::Orchestrator;
