//! The "get one quote" orchestrator.
//!
//! Composes the provider client, the in-memory cache, and the static
//! fallback table into a single operation that never fails: source quality
//! degrades instead, and the chosen tier is reported alongside the quote.

use chrono::Utc;
use rand::seq::IndexedRandom;
use std::sync::RwLock;

use crate::models::{Quote, QuoteSource};
use crate::quotes::cache::QuoteCache;
use crate::quotes::fallback;
use crate::quotes::provider::{FetchError, QuoteFetcher};

pub struct QuoteRetriever {
    fetcher: Box<dyn QuoteFetcher>,
    cache: RwLock<QuoteCache>,
    batch_limit: usize,
}

/// Internal failure the outer boundary converts to the `fallback-error`
/// tier. Only lock poisoning can produce it today.
struct CachePoisoned;

impl QuoteRetriever {
    pub fn new(
        fetcher: Box<dyn QuoteFetcher>,
        cache_ttl: std::time::Duration,
        batch_limit: usize,
    ) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(QuoteCache::new(cache_ttl)),
            batch_limit,
        }
    }

    /// Returns one quote and the tier that produced it. Never fails.
    pub async fn get_one(&self) -> (Quote, QuoteSource) {
        match self.try_get().await {
            Ok(result) => result,
            Err(CachePoisoned) => {
                log::error!("Quote cache lock poisoned, serving static fallback");
                (fallback::random_fallback(), QuoteSource::FallbackError)
            }
        }
    }

    /// Number of quotes currently cached, for the `X-Cache-Size` header
    pub fn cache_size(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    async fn try_get(&self) -> Result<(Quote, QuoteSource), CachePoisoned> {
        let now = Utc::now();

        // Tier 1: fresh cache
        {
            let cache = self.cache.read().map_err(|_| CachePoisoned)?;
            if cache.is_fresh_at(now) {
                if let Some(quote) = cache.random() {
                    return Ok((quote, QuoteSource::Collection));
                }
            }
        }

        // Tier 2: refresh from the provider
        match self.fetcher.fetch_batch().await {
            Ok(batch) => {
                let mut valid: Vec<Quote> = batch
                    .into_iter()
                    .filter(|q| !q.quote.trim().is_empty() && !q.author.trim().is_empty())
                    .collect();
                valid.truncate(self.batch_limit);

                if valid.is_empty() {
                    log::warn!("Provider batch had no valid quotes");
                    return self.degraded(QuoteSource::FallbackApiError);
                }

                let quote = valid
                    .choose(&mut rand::rng())
                    .cloned()
                    .unwrap_or_else(fallback::random_fallback);

                log::info!("Quote cache refreshed with {} quotes", valid.len());
                let mut cache = self.cache.write().map_err(|_| CachePoisoned)?;
                cache.replace(valid, Utc::now());

                Ok((quote, QuoteSource::ZenApi))
            }
            Err(FetchError::RateLimited) => {
                log::warn!("Quote provider rate limited us");
                self.degraded(QuoteSource::FallbackRateLimited)
            }
            Err(e) => {
                log::warn!("Quote fetch failed: {}", e);
                self.degraded(QuoteSource::FallbackApiError)
            }
        }
    }

    /// Tier 3: a stale cache entry still beats the static table, so serve
    /// it under the `collection` tag; otherwise fall back with the tag
    /// describing what went wrong upstream.
    fn degraded(&self, tag: QuoteSource) -> Result<(Quote, QuoteSource), CachePoisoned> {
        let cache = self.cache.read().map_err(|_| CachePoisoned)?;
        match cache.random() {
            Some(quote) => Ok((quote, QuoteSource::Collection)),
            None => Ok((fallback::random_fallback(), tag)),
        }
    }
}
