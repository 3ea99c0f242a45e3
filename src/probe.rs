//! HTTP probing and outcome classification
//!
//! Liveness is "did the server answer": any HTTP response counts as a
//! success, including 4xx and 5xx statuses. Only a transport-level failure
//! (connection refused, DNS failure, timeout) counts as a failure. This is a
//! deliberate policy, not an oversight.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{Error, Result};

/// Classification of one completed probe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with any HTTP response
    Succeeded(StatusCode),
    /// The request failed at the transport level or timed out
    Failed,
}

impl Outcome {
    /// Whether this outcome counts toward the success tally
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }
}

/// Probing seam for the worker pool
///
/// Workers hold `Arc<dyn Probe>`, so tests can substitute a mock that never
/// touches the network.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Issue one GET against the URL and classify the result
    async fn probe(&self, url: &str) -> Outcome;
}

/// reqwest-backed prober
///
/// Connection pooling is disabled so every probe measures a cold connection
/// rather than reusing a warmed one.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    /// Build a prober with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for Prober {
    async fn probe(&self, url: &str) -> Outcome {
        match self.client.get(url).send().await {
            Ok(resp) => {
                tracing::debug!(url = %url, status = %resp.status(), "probe answered");
                Outcome::Succeeded(resp.status())
            }
            Err(err) => {
                tracing::debug!(url = %url, error = %err, "probe failed");
                Outcome::Failed
            }
        }
    }
}
