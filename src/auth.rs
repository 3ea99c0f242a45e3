//! OAuth2 refresh-token exchange
//!
//! A one-shot exchange performed before probing begins. Any failure here is
//! fatal: without a bearer token the final report cannot be delivered, so
//! probing would be pointless.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Parameters for the refresh-token exchange
#[derive(Debug, Clone)]
pub struct TokenExchange {
    /// Token endpoint URL
    pub token_url: String,

    /// OAuth2 refresh token
    pub refresh_token: String,

    /// Redirect URI registered with the client
    pub redirect_uri: String,

    /// OAuth2 client id
    pub client_id: String,

    /// OAuth2 client secret
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl TokenExchange {
    /// Exchange the refresh token for an access token
    ///
    /// POSTs a form-encoded grant request and extracts `access_token` from
    /// the JSON body. Transport failure, a non-2xx status, an unparseable
    /// body, or a missing token all abort the run. Not retried.
    pub async fn fetch_access_token(&self, client: &reqwest::Client) -> Result<String> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let resp = client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::credential(format!("token request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::credential(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = resp
            .json()
            .await
            .map_err(|e| Error::credential(format!("unparseable token response: {e}")))?;

        match body.access_token {
            Some(token) if !token.is_empty() => {
                tracing::debug!("access token acquired");
                Ok(token)
            }
            _ => Err(Error::credential("token response missing access_token")),
        }
    }
}
