//! Jikan catalog lookup.
//!
//! Enrichment is strictly best-effort: every failure — HTTP, parse, no
//! result — degrades to "no enrichment" and is only logged. The lookup is
//! also genuinely cancellable: abandoning a detail view cancels the token
//! and the in-flight request loses the race.

use reqwest::Client;
use tokio_util::sync::CancellationToken;

use super::dto::{Enrichment, JikanSearchResponse};
use crate::log_debug;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::http::{create_http_client, USER_AGENT};
use crate::shared::utils::RateLimiter;

// Official Jikan rate limit.
const REQUESTS_PER_SECOND: f64 = 3.0;

pub struct JikanClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl JikanClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            client: create_http_client(USER_AGENT)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(REQUESTS_PER_SECOND),
        })
    }

    /// Looks up a series by title, taking the first TV result. Returns
    /// `None` on cancellation or on any failure.
    pub async fn lookup(&self, title: &str, cancel: &CancellationToken) -> Option<Enrichment> {
        if title.trim().is_empty() {
            return None;
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log_debug!("Jikan lookup for '{}' cancelled", title);
                None
            }
            result = self.fetch(title) => match result {
                Ok(enrichment) => enrichment,
                Err(err) => {
                    log_debug!("Jikan lookup for '{}' failed: {}", title, err);
                    None
                }
            }
        }
    }

    async fn fetch(&self, title: &str) -> AppResult<Option<Enrichment>> {
        self.rate_limiter.wait().await;

        let url = format!(
            "{}/anime?q={}&type=tv&limit=1",
            self.base_url,
            urlencoding::encode(title.trim())
        );
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: JikanSearchResponse = response.json().await?;

        Ok(body.data.into_iter().next().map(Enrichment::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancelled_token_short_circuits_the_lookup() {
        let client = JikanClient::new("http://127.0.0.1:9").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        // Biased select polls the cancelled branch first; no request is
        // ever issued against the unroutable address.
        assert_eq!(client.lookup("Frieren", &cancel).await, None);
    }

    #[tokio::test]
    async fn unreachable_endpoint_degrades_to_none() {
        let client = JikanClient::new("http://127.0.0.1:9").unwrap();
        let cancel = CancellationToken::new();
        assert_eq!(client.lookup("Frieren", &cancel).await, None);
    }

    #[tokio::test]
    async fn empty_title_is_never_sent() {
        let client = JikanClient::new("http://127.0.0.1:9").unwrap();
        let cancel = CancellationToken::new();
        assert_eq!(client.lookup("   ", &cancel).await, None);
    }
}
