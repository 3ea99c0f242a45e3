//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::auth::TokenExchange;
use crate::config::RunConfig;

/// Bounded-concurrency URL health checker with aggregate reporting
#[derive(Parser, Debug)]
#[command(name = "healthprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report target URL
    #[arg(
        short = 'u',
        long,
        default_value = "https://backend-challenge.line-apps.com/healthcheck/report"
    )]
    pub report_url: String,

    /// Path to the CSV file of target URLs
    #[arg(short = 'f', long, default_value = "test.csv")]
    pub file: PathBuf,

    /// Desired worker-pool ceiling
    #[arg(short = 'c', long, default_value_t = 70)]
    pub max_workers: usize,

    /// Per-probe timeout in seconds
    #[arg(short = 't', long, default_value_t = 10)]
    pub timeout: u64,

    /// OAuth2 token endpoint
    #[arg(long, default_value = "https://api.line.me/oauth2/v2.1/token")]
    pub token_url: String,

    /// OAuth2 refresh token
    #[arg(long, env = "HEALTHPROBE_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: String,

    /// OAuth2 redirect URI
    #[arg(long, env = "HEALTHPROBE_REDIRECT_URI")]
    pub redirect_uri: String,

    /// OAuth2 client id
    #[arg(long, env = "HEALTHPROBE_CLIENT_ID")]
    pub client_id: String,

    /// OAuth2 client secret
    #[arg(long, env = "HEALTHPROBE_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration from the parsed arguments
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            report_url: self.report_url.clone(),
            source_path: self.file.clone(),
            max_workers: self.max_workers,
            request_timeout_secs: self.timeout,
        }
    }

    /// Build the token-exchange parameters from the parsed arguments
    pub fn token_exchange(&self) -> TokenExchange {
        TokenExchange {
            token_url: self.token_url.clone(),
            refresh_token: self.refresh_token.clone(),
            redirect_uri: self.redirect_uri.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}
