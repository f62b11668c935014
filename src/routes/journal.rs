use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::CreateJournalEntry;
use crate::services::JournalService;

#[derive(Serialize)]
pub struct SaveEntryResponse {
    pub message: &'static str,
    pub inserted_id: Uuid,
}

#[derive(Serialize)]
pub struct DeleteEntryResponse {
    pub message: &'static str,
}

/// GET /api/journal
/// Lists saved quotes, newest first
pub async fn list_entries(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let entries = JournalService::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// POST /api/journal
/// Saves a quote to the journal; the save timestamp is server-side
pub async fn save_entry(
    pool: web::Data<DbPool>,
    body: web::Json<CreateJournalEntry>,
) -> AppResult<HttpResponse> {
    let entry = JournalService::create(pool.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(SaveEntryResponse {
        message: "Quote saved to journal",
        inserted_id: entry.id,
    }))
}

/// DELETE /api/journal/{id}
/// Removes a saved quote. Malformed ids are rejected before touching the
/// store.
pub async fn delete_entry(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = Uuid::parse_str(&raw_id)
        .map_err(|_| AppError::Validation(format!("Invalid journal entry id: {}", raw_id)))?;

    JournalService::delete(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(DeleteEntryResponse {
        message: "Journal entry removed",
    }))
}

/// Configure journal routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/journal")
            .route("", web::get().to(list_entries))
            .route("", web::post().to(save_entry))
            .route("/{id}", web::delete().to(delete_entry)),
    );
}
