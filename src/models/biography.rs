use serde::Serialize;

/// Outcome of an author biography lookup.
///
/// Lookup failures are data, not errors: the client renders an empty state
/// from `found: false` and the `reason` tag.
#[derive(Debug, Clone, Serialize)]
pub struct Biography {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Which lookup strategy produced the hit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl Biography {
    pub fn hit(
        title: String,
        summary: String,
        url: Option<String>,
        source: &'static str,
    ) -> Self {
        Self {
            found: true,
            title: Some(title),
            summary: Some(summary),
            url,
            source: Some(source),
            reason: None,
        }
    }

    pub fn miss(reason: &'static str) -> Self {
        Self {
            found: false,
            title: None,
            summary: None,
            url: None,
            source: None,
            reason: Some(reason),
        }
    }
}
