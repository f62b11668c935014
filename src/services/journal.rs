use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{CreateJournalEntry, JournalEntry};

pub struct JournalService;

impl JournalService {
    /// Lists all journal entries, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT id, quote, author, saved_at
            FROM journal_entries
            ORDER BY saved_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Saves a quote to the journal. `saved_at` is stamped here; clients
    /// cannot supply it.
    pub async fn create(pool: &PgPool, input: CreateJournalEntry) -> AppResult<JournalEntry> {
        let quote = input.quote.trim();
        let author = input.author.trim();
        if quote.is_empty() {
            return Err(AppError::Validation("Quote text is required".to_string()));
        }
        if author.is_empty() {
            return Err(AppError::Validation("Author is required".to_string()));
        }

        let entry = sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries (id, quote, author, saved_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, quote, author, saved_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(quote)
        .bind(author)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Deletes a journal entry by id
    pub async fn delete(pool: &PgPool, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Journal entry {} not found",
                id
            )));
        }

        Ok(())
    }
}
