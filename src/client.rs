//! Remote lint client.
//!
//! Posts a certificate to the lint endpoint as a url-encoded form field and
//! hands back the raw response text. Parsing happens in `aggregate`.

use crate::error::{HarnessError, Result};
use reqwest::header::CONTENT_TYPE;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Form field carrying the certificate content.
pub const FORM_FIELD: &str = "b64input";

/// Submits one file to a linter and returns the raw response body.
pub trait LintClient {
    fn lint(&self, path: &Path) -> Result<String>;
}

/// HTTP settings for [`HttpLintClient`].
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub endpoint: String,
    pub user_agent: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

/// Blocking HTTP client for the lint endpoint. No retries.
pub struct HttpLintClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpLintClient {
    pub fn new(opts: &HttpOptions) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(opts.user_agent.clone());
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HarnessError::Client(e.to_string()))?;
        Ok(Self::with_client(&opts.endpoint, client))
    }

    /// Wrap a preconfigured client.
    pub fn with_client(endpoint: &str, client: reqwest::blocking::Client) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }
}

impl LintClient for HttpLintClient {
    fn lint(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            endpoint = %self.endpoint,
            bytes = bytes.len(),
            "posting certificate"
        );

        let network = |message: String| HarnessError::Network {
            path: path.to_path_buf(),
            message,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_body(&bytes))
            .send()
            .map_err(|e| network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(network(format!("{} returned {}", self.endpoint, status)));
        }
        let body = response.text().map_err(|e| network(e.to_string()))?;
        tracing::trace!(path = %path.display(), body = %body, "lint response");
        Ok(body)
    }
}

/// Encode raw file bytes as the single form field, byte for byte.
pub fn form_body(bytes: &[u8]) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(bytes).collect();
    format!("{}={}", FORM_FIELD, encoded)
}
