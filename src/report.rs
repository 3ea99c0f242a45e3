//! Final report payload and sender

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::Aggregate;

/// Fixed-shape payload POSTed to the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Total probes performed
    pub total_websites: u64,

    /// Probes that received an HTTP response
    pub success: u64,

    /// Probes that failed at the transport level
    pub failure: u64,

    /// Wall-clock run time in nanoseconds
    pub total_time: u64,
}

impl HealthReport {
    /// Build the payload from a run's final aggregate
    pub fn from_aggregate(aggregate: &Aggregate) -> Self {
        Self {
            total_websites: aggregate.total(),
            success: aggregate.success,
            failure: aggregate.failure,
            total_time: aggregate.elapsed.as_nanos() as u64,
        }
    }
}

/// Sends the aggregate report, authenticated with the access token
#[derive(Debug, Clone)]
pub struct ReportSender {
    url: String,
    access_token: String,
    client: reqwest::Client,
}

impl ReportSender {
    /// Create a sender for the given collector URL and token
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: access_token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// POST the report and surface the response status to the caller
    ///
    /// The collector expects the raw access token in the `Authorization`
    /// header, without a `Bearer` prefix. A non-2xx status does not alter the
    /// already-collected statistics; the caller decides what it means for the
    /// run's exit status.
    pub async fn send(&self, report: &HealthReport) -> Result<StatusCode> {
        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &self.access_token)
            .json(report)
            .send()
            .await
            .map_err(|e| Error::report(format!("report POST failed: {e}")))?;

        let status = resp.status();
        tracing::info!(status = %status, "report delivered");
        Ok(status)
    }
}
