//! HTTP retrieval of remote image bytes.
//!
//! One fetch per reference, no retries, no explicit timeout beyond the
//! client defaults. Every failure mode collapses to [`FetchOutcome::Fallback`]
//! so a dead image host can never abort a batch run.

use crate::utils::constants::CHROME_USER_AGENT;
use reqwest::Client;

/// Result of one image fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Full response body of a successful request
    Bytes(Vec<u8>),
    /// Fetch failed; the caller substitutes the default image
    Fallback,
}

/// Fetches remote images over HTTP(S).
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    #[must_use]
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {e}");
                Client::new()
            });
        Self { client }
    }

    /// Retrieve the full byte content of `url`.
    ///
    /// Invalid URLs, connection errors, non-success statuses, and body read
    /// errors are all treated alike: log a warning, return `Fallback`.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Failed to fetch {url}: {e}");
                return FetchOutcome::Fallback;
            }
        };

        match response.bytes().await {
            Ok(body) => FetchOutcome::Bytes(body.to_vec()),
            Err(e) => {
                log::warn!("Failed to read response body from {url}: {e}");
                FetchOutcome::Fallback
            }
        }
    }
}

impl Default for ImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
