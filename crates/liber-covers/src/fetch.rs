//! # Cover Fetcher
//!
//! The network seam of cover resolution: a trait so tests can count probe
//! calls without a network, and a reqwest implementation for production.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const HTTP_USER_AGENT: &str = "Liber/0.1 (+https://github.com/liber-app/liber)";

/// Probes whether a cover image exists at a URL.
#[async_trait]
pub trait CoverFetcher: Send + Sync {
    /// Returns true when the provider answers with a 200-class status.
    ///
    /// Any other status and every transport failure (timeout, DNS,
    /// connection error) are the same outcome: no cover. Implementations
    /// must not panic and must not surface errors.
    async fn cover_exists(&self, url: &str) -> bool;
}

/// HTTP implementation of [`CoverFetcher`].
#[derive(Debug, Clone)]
pub struct HttpCoverFetcher {
    client: reqwest::Client,
}

impl HttpCoverFetcher {
    /// Creates a fetcher with a bounded per-request timeout.
    ///
    /// The timeout keeps an uncached listing from stalling on a slow
    /// provider; covers are enrichment, not correctness-critical.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(HTTP_USER_AGENT)
            .build()
            // A default client (no timeout) still probes best-effort
            .unwrap_or_default();

        HttpCoverFetcher { client }
    }
}

#[async_trait]
impl CoverFetcher for HttpCoverFetcher {
    async fn cover_exists(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(url = %url, status = %status, "cover probe answered");
                status.is_success()
            }
            Err(err) => {
                debug!(url = %url, error = %err, "cover probe failed");
                false
            }
        }
    }
}
