//! Unit tests for configuration parsing
//!
//! Tests environment variable parsing and default values.
//!
//! Note: These tests modify global environment variables and must run serially.

use serial_test::serial;
use std::time::Duration;
use zenjournal::config::{MoodConfig, QuotesConfig, RateLimitConfig};

// =============================================================================
// Quotes Config Tests
// =============================================================================

#[test]
#[serial]
fn test_quotes_config_defaults() {
    std::env::remove_var("QUOTES_API_URL");
    std::env::remove_var("QUOTES_TIMEOUT_SECS");
    std::env::remove_var("QUOTES_CACHE_TTL_SECS");
    std::env::remove_var("QUOTES_BATCH_LIMIT");

    let config = QuotesConfig::from_env();

    assert_eq!(config.api_url, "https://zenquotes.io/api");
    assert_eq!(config.timeout, Duration::from_secs(15));
    assert_eq!(config.cache_ttl, Duration::from_secs(7200));
    assert_eq!(config.batch_limit, 50);
}

#[test]
#[serial]
fn test_quotes_config_custom_values() {
    std::env::set_var("QUOTES_API_URL", "http://localhost:9000/api");
    std::env::set_var("QUOTES_TIMEOUT_SECS", "3");
    std::env::set_var("QUOTES_CACHE_TTL_SECS", "60");
    std::env::set_var("QUOTES_BATCH_LIMIT", "5");

    let config = QuotesConfig::from_env();

    assert_eq!(config.api_url, "http://localhost:9000/api");
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.cache_ttl, Duration::from_secs(60));
    assert_eq!(config.batch_limit, 5);

    std::env::remove_var("QUOTES_API_URL");
    std::env::remove_var("QUOTES_TIMEOUT_SECS");
    std::env::remove_var("QUOTES_CACHE_TTL_SECS");
    std::env::remove_var("QUOTES_BATCH_LIMIT");
}

#[test]
#[serial]
fn test_quotes_config_invalid_values_use_defaults() {
    std::env::set_var("QUOTES_TIMEOUT_SECS", "not-a-number");
    std::env::set_var("QUOTES_BATCH_LIMIT", "fifty");

    let config = QuotesConfig::from_env();

    assert_eq!(config.timeout, Duration::from_secs(15));
    assert_eq!(config.batch_limit, 50);

    std::env::remove_var("QUOTES_TIMEOUT_SECS");
    std::env::remove_var("QUOTES_BATCH_LIMIT");
}

// =============================================================================
// Rate Limit Config Tests
// =============================================================================

#[test]
#[serial]
fn test_rate_limit_config_defaults() {
    std::env::remove_var("RATE_LIMIT_WINDOW_SECS");
    std::env::remove_var("RATE_LIMIT_MAX_REQUESTS");

    let config = RateLimitConfig::from_env();

    assert_eq!(config.window, Duration::from_secs(60));
    assert_eq!(config.max_requests, 10);
}

#[test]
#[serial]
fn test_rate_limit_config_custom_values() {
    std::env::set_var("RATE_LIMIT_WINDOW_SECS", "30");
    std::env::set_var("RATE_LIMIT_MAX_REQUESTS", "3");

    let config = RateLimitConfig::from_env();

    assert_eq!(config.window, Duration::from_secs(30));
    assert_eq!(config.max_requests, 3);

    std::env::remove_var("RATE_LIMIT_WINDOW_SECS");
    std::env::remove_var("RATE_LIMIT_MAX_REQUESTS");
}

// =============================================================================
// Mood Config Tests
// =============================================================================

#[test]
#[serial]
fn test_mood_config_key_is_optional() {
    std::env::remove_var("MOOD_API_KEY");

    let config = MoodConfig::from_env();

    assert!(config.api_key.is_none());
    assert_eq!(config.timeout, Duration::from_secs(15));
    assert!(!config.primary_model.is_empty());
    assert!(!config.fallback_model.is_empty());
}

#[test]
#[serial]
fn test_mood_config_reads_key_and_models() {
    std::env::set_var("MOOD_API_KEY", "gsk-test");
    std::env::set_var("MOOD_PRIMARY_MODEL", "model-a");
    std::env::set_var("MOOD_FALLBACK_MODEL", "model-b");

    let config = MoodConfig::from_env();

    assert_eq!(config.api_key.as_deref(), Some("gsk-test"));
    assert_eq!(config.primary_model, "model-a");
    assert_eq!(config.fallback_model, "model-b");

    std::env::remove_var("MOOD_API_KEY");
    std::env::remove_var("MOOD_PRIMARY_MODEL");
    std::env::remove_var("MOOD_FALLBACK_MODEL");
}
