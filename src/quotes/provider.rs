//! Client for the external quote provider.
//!
//! The provider serves batches of quotes as a JSON array of objects with
//! short field names (`q` for text, `a` for author). Items with either
//! field missing survive deserialization and are discarded later by the
//! orchestrator's validation pass.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::QuotesConfig;
use crate::models::Quote;

/// Errors from a batch fetch, by fallback tier
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("provider rate limited the request")]
    RateLimited,

    #[error("provider returned HTTP {0}")]
    Http(u16),

    #[error("request failed: {0}")]
    Network(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Seam for fetching quote batches, stubbed in orchestrator tests
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch_batch(&self) -> Result<Vec<Quote>, FetchError>;
}

/// Raw item shape returned by the provider
#[derive(Debug, Deserialize)]
struct ProviderQuote {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    a: Option<String>,
}

impl ProviderQuote {
    fn into_quote(self) -> Option<Quote> {
        match (self.q, self.a) {
            (Some(q), Some(a)) => Some(Quote { quote: q, author: a }),
            _ => None,
        }
    }
}

/// HTTP client for the ZenQuotes-style provider API
pub struct ZenQuotesClient {
    client: reqwest::Client,
    base_url: String,
}

impl ZenQuotesClient {
    pub fn new(config: &QuotesConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuoteFetcher for ZenQuotesClient {
    async fn fetch_batch(&self) -> Result<Vec<Quote>, FetchError> {
        let url = format!("{}/quotes", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network("request timed out".to_string())
            } else if e.is_connect() {
                FetchError::Network("connection failed".to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let items: Vec<ProviderQuote> = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        if items.is_empty() {
            return Err(FetchError::Malformed("empty batch".to_string()));
        }

        Ok(items.into_iter().filter_map(ProviderQuote::into_quote).collect())
    }
}
