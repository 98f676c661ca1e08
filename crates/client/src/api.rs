//! REST client for the report endpoints.
//!
//! Wraps `GET {base}/trainData` and `GET {base}/trainData/{id}` using
//! [`reqwest`]. Bodies are decoded and validated through
//! `raildash_core::report` before they leave this module, so callers only
//! ever see fully-typed reports.
//!
//! Failures are split so views can tell "request failed" apart from
//! "report does not exist": a 404 on the detail endpoint is `Ok(None)`,
//! never an error.

use reqwest::{StatusCode, Url};

use raildash_core::error::CoreError;
use raildash_core::report::{decode_collection, decode_report, TrainReport};

use crate::config::ClientConfig;

/// Path segment of the report collection endpoint.
const TRAIN_DATA_SEGMENT: &str = "trainData";

/// Errors from the fetch layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (connect, DNS, TLS, timeout, body read).
    #[error("Could not reach server: {0}")]
    Network(#[from] reqwest::Error),

    /// The request was valid but the resource does not exist.
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    /// The backend returned a non-2xx status other than 404.
    #[error("Server error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not a well-formed, valid report payload.
    #[error("Malformed response: {0}")]
    Parse(#[from] CoreError),

    /// The configured base URL cannot carry path segments.
    #[error("Invalid API base URL: {0}")]
    InvalidBase(String),
}

/// HTTP client for the report backend.
#[derive(Debug, Clone)]
pub struct TrainDataApi {
    client: reqwest::Client,
    base_url: Url,
}

impl TrainDataApi {
    /// Create a client for `base`, e.g. `http://host:3000` or
    /// `https://host/api`.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        Self::with_client(reqwest::Client::new(), base)
    }

    /// Create a client from configuration, applying the transport timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Self::with_client(client, &config.api_base)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base: &str) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base).map_err(|e| FetchError::InvalidBase(format!("{base}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBase(base.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// Fetch every report.
    ///
    /// Sends `GET {base}/trainData`. Order is exactly as returned by the
    /// backend.
    pub async fn list_trains(&self) -> Result<Vec<TrainReport>, FetchError> {
        let url = self.endpoint(&[TRAIN_DATA_SEGMENT])?;
        tracing::debug!(%url, "Fetching train list");

        let response = self.client.get(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }

        let bytes = Self::ensure_success(response).await?.bytes().await?;
        Ok(decode_collection(&bytes)?)
    }

    /// Fetch one report by identifier.
    ///
    /// Sends `GET {base}/trainData/{id}` with `id` percent-encoded as a
    /// single path segment. Returns `Ok(None)` on 404.
    pub async fn get_train(&self, train_id: &str) -> Result<Option<TrainReport>, FetchError> {
        let url = self.endpoint(&[TRAIN_DATA_SEGMENT, train_id])?;
        tracing::debug!(%url, train_id, "Fetching train details");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(train_id, "Train not found");
            return Ok(None);
        }

        let bytes = Self::ensure_success(response).await?.bytes().await?;
        let report = decode_report(&bytes)?;
        if report.train_id != train_id {
            return Err(FetchError::Parse(CoreError::Validation(format!(
                "requested train {train_id} but received {}",
                report.train_id
            ))));
        }
        Ok(Some(report))
    }

    // ---- private helpers ----

    /// Append `segments` to the base URL path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidBase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`FetchError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
