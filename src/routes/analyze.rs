use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::{client_identifier, FixedWindowLimiter, MoodService, RateDecision};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub quote: Option<String>,
}

/// POST /api/analyze
/// Analyzes the mood of a quote for UI theming. Rate limited per client
/// IP; AI failures degrade to a deterministic pair flagged with
/// `X-Fallback: true` rather than an error status.
pub async fn analyze(
    req: HttpRequest,
    limiter: web::Data<FixedWindowLimiter>,
    mood: web::Data<MoodService>,
    body: web::Json<AnalyzeRequest>,
) -> AppResult<HttpResponse> {
    let client_id = client_identifier(&req);
    if let RateDecision::Denied { retry_after } = limiter.check(&client_id) {
        log::warn!("Rate limited analyze request from {}", client_id);
        return Err(AppError::RateLimited { retry_after });
    }

    let text = body.quote.as_deref().unwrap_or("");
    let analysis = mood.analyze(text).await?;

    let mut response = HttpResponse::Ok();
    if analysis.fallback {
        response.insert_header(("X-Fallback", "true"));
    }

    Ok(response.json(analysis.result))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/analyze").route("", web::post().to(analyze)));
}
