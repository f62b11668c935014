//! Author biography lookup against an encyclopedia API.
//!
//! Ordered strategy chain: a direct summary-by-title lookup first, then a
//! full-text search whose top hit is re-fetched as a summary. Each stage
//! is independently caught; an exhausted chain yields a tagged miss, never
//! an error, so the client can render an empty state.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::WikiConfig;
use crate::models::Biography;

/// Honorifics stripped from names before lookup
const HONORIFIC_PREFIXES: &[&str] = &[
    "dr", "sir", "saint", "st", "mr", "mrs", "ms", "lady", "lord",
];
const HONORIFIC_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii"];

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The strategy ran fine but has no article for this name
    #[error("no matching article")]
    Miss,

    #[error("lookup failed: {0}")]
    Upstream(String),
}

/// One stage of the lookup chain
#[async_trait]
pub trait BiographyLookup: Send + Sync {
    fn name(&self) -> &'static str;
    async fn lookup(&self, name: &str) -> Result<Biography, LookupError>;
}

/// Strips honorific prefixes and suffixes, keeping at least one word
pub fn normalize_name(name: &str) -> String {
    fn canonical(word: &str) -> String {
        word.trim_matches(|c: char| c == '.' || c == ',').to_lowercase()
    }

    let mut words: Vec<&str> = name.split_whitespace().collect();
    while words.len() > 1 && HONORIFIC_PREFIXES.contains(&canonical(words[0]).as_str()) {
        words.remove(0);
    }
    while words.len() > 1
        && HONORIFIC_SUFFIXES.contains(&canonical(words[words.len() - 1]).as_str())
    {
        words.pop();
    }

    let joined = words.join(" ");
    let cleaned = joined.trim_end_matches(',').trim();
    if cleaned.is_empty() {
        name.trim().to_string()
    } else {
        cleaned.to_string()
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SummaryResponse {
    title: String,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<DesktopUrls>,
}

#[derive(Deserialize)]
struct DesktopUrls {
    #[serde(default)]
    page: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

// ---------------------------------------------------------------------------
// Shared summary fetch
// ---------------------------------------------------------------------------

fn summary_url(base_url: &str, title: &str) -> Result<url::Url, LookupError> {
    let mut url = url::Url::parse(base_url)
        .map_err(|e| LookupError::Upstream(format!("bad encyclopedia base URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::Upstream("encyclopedia base URL cannot hold a path".to_string()))?
        .pop_if_empty()
        .extend(&["api", "rest_v1", "page", "summary", &title.replace(' ', "_")]);
    Ok(url)
}

fn request_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Upstream("request timed out".to_string())
    } else {
        LookupError::Upstream(e.to_string())
    }
}

async fn fetch_summary(
    client: &reqwest::Client,
    base_url: &str,
    title: &str,
    source: &'static str,
) -> Result<Biography, LookupError> {
    let url = summary_url(base_url, title)?;
    let response = client.get(url).send().await.map_err(request_error)?;

    let status = response.status();
    if status.as_u16() == 404 {
        return Err(LookupError::Miss);
    }
    if !status.is_success() {
        return Err(LookupError::Upstream(format!("HTTP {}", status.as_u16())));
    }

    let summary: SummaryResponse = response
        .json()
        .await
        .map_err(|e| LookupError::Upstream(e.to_string()))?;

    match summary.extract.filter(|e| !e.trim().is_empty()) {
        Some(extract) => Ok(Biography::hit(
            summary.title,
            extract,
            summary
                .content_urls
                .and_then(|c| c.desktop)
                .and_then(|d| d.page),
            source,
        )),
        // An article shell with no extract is as good as no article
        None => Err(LookupError::Miss),
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Stage 1: direct REST summary by title
struct SummaryLookup {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl BiographyLookup for SummaryLookup {
    fn name(&self) -> &'static str {
        "summary"
    }

    async fn lookup(&self, name: &str) -> Result<Biography, LookupError> {
        fetch_summary(&self.client, &self.base_url, name, "summary").await
    }
}

/// Stage 2: full-text search, then summary of the top hit
struct SearchLookup {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl BiographyLookup for SearchLookup {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn lookup(&self, name: &str) -> Result<Biography, LookupError> {
        let url = format!("{}/w/api.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", name),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Upstream(format!("HTTP {}", status.as_u16())));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        let top_hit = results
            .query
            .and_then(|q| q.search.into_iter().next())
            .ok_or(LookupError::Miss)?;

        fetch_summary(&self.client, &self.base_url, &top_hit.title, "search").await
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct BiographyService {
    strategies: Vec<Box<dyn BiographyLookup>>,
}

impl BiographyService {
    pub fn new(config: &WikiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");
        let base_url = config.api_url.trim_end_matches('/').to_string();

        Self::with_strategies(vec![
            Box::new(SummaryLookup {
                client: client.clone(),
                base_url: base_url.clone(),
            }),
            Box::new(SearchLookup { client, base_url }),
        ])
    }

    /// Test seam: run the chain over arbitrary strategies
    pub fn with_strategies(strategies: Vec<Box<dyn BiographyLookup>>) -> Self {
        Self { strategies }
    }

    /// Runs the chain in order and returns the first hit. An exhausted
    /// chain is a tagged miss: `not-found` when every stage simply had no
    /// article, `unavailable` when any stage failed upstream.
    pub async fn lookup(&self, raw_name: &str) -> Biography {
        let name = normalize_name(raw_name);
        let mut upstream_failure = false;

        for strategy in &self.strategies {
            match strategy.lookup(&name).await {
                Ok(bio) => return bio,
                Err(LookupError::Miss) => {
                    log::debug!("Biography strategy {} missed for {}", strategy.name(), name);
                }
                Err(LookupError::Upstream(e)) => {
                    upstream_failure = true;
                    log::warn!("Biography strategy {} failed for {}: {}", strategy.name(), name, e);
                }
            }
        }

        Biography::miss(if upstream_failure {
            "unavailable"
        } else {
            "not-found"
        })
    }
}
