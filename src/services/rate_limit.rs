//! Fixed-window rate limiting for the mood analysis endpoint.
//!
//! Advisory abuse mitigation, not a strict quota: state is per-process,
//! so horizontally scaled instances each count separately.

use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Map growth bound; expired buckets are swept when the map passes this
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Denied { retry_after: u64 },
}

#[derive(Debug)]
struct Window {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// Per-client fixed-window request counter
pub struct FixedWindowLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowLimiter {
    pub fn new(window: std::time::Duration, max_requests: u32) -> Self {
        Self {
            window: Duration::from_std(window).unwrap_or_else(|_| Duration::seconds(60)),
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, client_id: &str) -> RateDecision {
        self.check_at(client_id, Utc::now())
    }

    /// Window transition per client: expired or absent entry resets to a
    /// fresh window of one; a full window denies; otherwise increment.
    pub fn check_at(&self, client_id: &str, now: DateTime<Utc>) -> RateDecision {
        // A poisoned map fails open: this limiter is advisory
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if windows.len() > SWEEP_THRESHOLD {
            windows.retain(|_, w| now <= w.reset_at);
        }

        match windows.get_mut(client_id) {
            Some(window) if now <= window.reset_at => {
                if window.count >= self.max_requests {
                    RateDecision::Denied {
                        retry_after: self.window.num_seconds().max(1) as u64,
                    }
                } else {
                    window.count += 1;
                    RateDecision::Allowed
                }
            }
            _ => {
                windows.insert(
                    client_id.to_string(),
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                RateDecision::Allowed
            }
        }
    }
}

/// Derives the rate-limit bucket key from forwarded-IP headers.
///
/// Proxied deployments set `X-Forwarded-For` (first hop wins) or
/// `X-Real-IP`. Requests without either share the `"unknown"` bucket;
/// that grouping is deliberate.
pub fn client_identifier(req: &HttpRequest) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| {
            value
                .split(',')
                .map(str::trim)
                .find(|hop| !hop.is_empty())
                .map(str::to_string)
        });

    forwarded
        .or_else(|| {
            req.headers()
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
