//! healthprobe: bounded-concurrency URL health-check engine
//!
//! This crate turns a list of target URLs into a single aggregate health
//! report, using:
//!
//! - A bounded worker pool fed by a single-producer job queue
//! - A thread-safe stat aggregator (no lost increments)
//! - A concurrency budget derived from the host's file-descriptor ceiling
//! - An OAuth2 refresh-token exchange gating the final report POST

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod budget;
pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod probe;
pub mod queue;
pub mod report;
pub mod source;
pub mod stats;
pub mod worker;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use orchestrator::{Orchestrator, OrchestratorBuilder};
pub use probe::{Outcome, Probe, Prober};
pub use queue::{Job, QueueConfig};
pub use report::{HealthReport, ReportSender};
pub use stats::{Aggregate, ProbeStats};
pub use worker::{Worker, WorkerStats};
