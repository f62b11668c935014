use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Journal entry model for reading from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub quote: String,
    pub author: String,
    pub saved_at: DateTime<Utc>,
}

/// DTO for saving a quote to the journal.
///
/// No timestamp field: `saved_at` is stamped server-side and anything the
/// client sends is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateJournalEntry {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
}
