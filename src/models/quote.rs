use serde::{Deserialize, Serialize};

/// A quote as served to clients and held in the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }
}

/// Which retrieval tier produced a quote, reported via the
/// `X-Quote-Source` response header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    /// Fresh batch from the live provider
    ZenApi,
    /// Served from the in-memory cache
    Collection,
    /// Provider answered 429 and the cache was empty
    FallbackRateLimited,
    /// Provider failed or returned garbage and the cache was empty
    FallbackApiError,
    /// Unexpected internal failure
    FallbackError,
}

impl QuoteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSource::ZenApi => "zen-api",
            QuoteSource::Collection => "collection",
            QuoteSource::FallbackRateLimited => "fallback-rate-limited",
            QuoteSource::FallbackApiError => "fallback-api-error",
            QuoteSource::FallbackError => "fallback-error",
        }
    }
}
