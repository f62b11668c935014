//! Integration tests for the mood analysis API
//!
//! No network: the AI endpoint is pointed at an unroutable address, which
//! exercises the degraded (fallback-flagged) path, validation, rate
//! limiting, and the unconfigured-key diagnostics.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::time::Duration;
use zenjournal::config::MoodConfig;
use zenjournal::routes;
use zenjournal::services::{FixedWindowLimiter, MoodService};

const MOODS: [&str; 9] = [
    "inspirational",
    "motivational",
    "philosophical",
    "humorous",
    "melancholic",
    "optimistic",
    "contemplative",
    "wise",
    "uplifting",
];

fn mood_config(api_key: Option<&str>) -> MoodConfig {
    MoodConfig {
        // Unroutable: every completion attempt fails fast
        api_url: "http://127.0.0.1:9".to_string(),
        api_key: api_key.map(str::to_string),
        primary_model: "primary-model".to_string(),
        fallback_model: "fallback-model".to_string(),
        timeout: Duration::from_millis(200),
    }
}

macro_rules! analyze_app {
    ($api_key:expr, $max_requests:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(MoodService::new(&mood_config($api_key))))
                .app_data(web::Data::new(FixedWindowLimiter::new(
                    Duration::from_secs(60),
                    $max_requests,
                )))
                .configure(routes::analyze::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_upstream_failure_degrades_to_fallback_pair() {
    let app = analyze_app!(Some("test-key"), 10);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": "Be here now."}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("X-Fallback").unwrap().to_str().unwrap(),
        "true"
    );

    let body: Value = test::read_body_json(resp).await;
    assert!(MOODS.contains(&body["mood"].as_str().unwrap()));
    let color = body["color"].as_str().unwrap();
    assert!(color.starts_with('#') && color.len() == 7);
}

#[actix_web::test]
async fn test_empty_quote_is_rejected() {
    let app = analyze_app!(Some("test-key"), 10);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[actix_web::test]
async fn test_missing_quote_field_is_rejected() {
    let app = analyze_app!(Some("test-key"), 10);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_oversized_quote_is_rejected() {
    let app = analyze_app!(Some("test-key"), 10);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": "x".repeat(1001)}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_missing_api_key_reports_unconfigured() {
    let app = analyze_app!(None, 10);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": "Be here now."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Not configured"));
}

#[actix_web::test]
async fn test_eleventh_request_is_rate_limited() {
    let app = analyze_app!(Some("test-key"), 10);

    for _ in 0..10 {
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(json!({"quote": "Be here now."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": "Be here now."}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 429);
    assert_eq!(
        resp.headers().get("Retry-After").unwrap().to_str().unwrap(),
        "60"
    );
}

#[actix_web::test]
async fn test_forwarded_clients_get_their_own_window() {
    let app = analyze_app!(Some("test-key"), 1);

    // Exhaust the shared "unknown" bucket
    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": "Be here now."}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({"quote": "Be here now."}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 429);

    // A forwarded client is a different bucket
    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .insert_header(("X-Forwarded-For", "203.0.113.9"))
        .set_json(json!({"quote": "Be here now."}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}
