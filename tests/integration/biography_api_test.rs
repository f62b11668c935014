//! Integration tests for the biography endpoint
//!
//! The encyclopedia API is pointed at an unroutable address: upstream
//! failure must come back as a tagged miss, not an error status.

use actix_web::{test, web, App};
use serde_json::Value;
use std::time::Duration;
use zenjournal::config::WikiConfig;
use zenjournal::routes;
use zenjournal::services::BiographyService;

fn unreachable_service() -> BiographyService {
    BiographyService::new(&WikiConfig {
        api_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_millis(200),
    })
}

#[actix_web::test]
async fn test_upstream_failure_is_a_tagged_miss() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(unreachable_service()))
            .configure(routes::biography::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/biography?name=Marcus%20Aurelius")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["found"], false);
    assert_eq!(body["reason"], "unavailable");
}

#[actix_web::test]
async fn test_blank_name_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(unreachable_service()))
            .configure(routes::biography::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/biography?name=%20%20")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[actix_web::test]
async fn test_missing_name_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(unreachable_service()))
            .configure(routes::biography::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/biography").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
