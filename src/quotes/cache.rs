use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;

use crate::models::Quote;

/// In-memory store of the most recently fetched quote batch.
///
/// Replaced wholesale on refresh, never merged. Lives for the process
/// lifetime only; horizontally scaled instances each hold their own copy.
#[derive(Debug)]
pub struct QuoteCache {
    quotes: Vec<Quote>,
    fetched_at: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            quotes: Vec::new(),
            fetched_at: None,
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::hours(2)),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Whether the cached batch can still be served as primary source.
    /// Takes `now` so tests control the clock.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        match self.fetched_at {
            Some(fetched_at) => !self.quotes.is_empty() && now - fetched_at < self.ttl,
            None => false,
        }
    }

    /// Uniformly random cached quote, if any
    pub fn random(&self) -> Option<Quote> {
        self.quotes.choose(&mut rand::rng()).cloned()
    }

    /// Replaces the whole batch and resets the timestamp
    pub fn replace(&mut self, quotes: Vec<Quote>, now: DateTime<Utc>) {
        self.quotes = quotes;
        self.fetched_at = Some(now);
    }
}
