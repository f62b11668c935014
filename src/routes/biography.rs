use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::BiographyService;

#[derive(Debug, Deserialize)]
pub struct BiographyQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// GET /api/biography?name=...
/// Looks up an author biography. Upstream failures are data (`found:
/// false` with a reason tag), not errors.
pub async fn get_biography(
    service: web::Data<BiographyService>,
    query: web::Query<BiographyQuery>,
) -> AppResult<HttpResponse> {
    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("Author name is required".to_string()))?;

    let biography = service.lookup(name).await;
    Ok(HttpResponse::Ok().json(biography))
}

/// Configure biography routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/biography").route("", web::get().to(get_biography)));
}
