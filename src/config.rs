//! Run configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a single health-check run
///
/// Defines where the job list comes from, how wide the worker pool may be,
/// how long each probe may take, and where the aggregate report goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Where to POST the final aggregate
    pub report_url: String,

    /// CSV file of target URLs, one per row, URL in the first column
    pub source_path: PathBuf,

    /// Desired worker-pool ceiling (may be lowered by the host fd limit)
    pub max_workers: usize,

    /// Per-probe timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            report_url: String::new(),
            source_path: PathBuf::from("test.csv"),
            max_workers: 70,
            request_timeout_secs: 10,
        }
    }
}

impl RunConfig {
    /// Per-probe timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_workers == 0 {
            return Err(Error::config("max_workers must be at least 1"));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::config("request timeout must be at least 1 second"));
        }

        if self.report_url.is_empty() {
            return Err(Error::config("report URL must not be empty"));
        }

        Ok(())
    }
}
