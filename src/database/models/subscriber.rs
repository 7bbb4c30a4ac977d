use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One reminder subscription: soft state only, flipped on enable/disable and
/// never hard-deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Subscriber {
    pub chat_id: i64,
    pub enabled: bool,
    pub updated_at: String,
}

impl Subscriber {
    /// Inserts or updates the enabled flag for a chat, stamping the write.
    pub async fn upsert(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        enabled: bool,
    ) -> Result<Self, sqlx::Error> {
        let updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO subscribers (chat_id, enabled, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(chat_id) DO UPDATE SET enabled = excluded.enabled, updated_at = excluded.updated_at"
        )
        .bind(chat_id)
        .bind(enabled)
        .bind(&updated_at)
        .execute(pool)
        .await?;

        Ok(Subscriber {
            chat_id,
            enabled,
            updated_at,
        })
    }

    pub async fn find(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Subscriber>(
            "SELECT chat_id, enabled, updated_at FROM subscribers WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await
    }

    /// Whether this chat currently wants reminders. Unknown chats are off.
    pub async fn is_enabled(pool: &sqlx::SqlitePool, chat_id: i64) -> Result<bool, sqlx::Error> {
        let enabled = sqlx::query_scalar::<_, bool>(
            "SELECT enabled FROM subscribers WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await?;

        Ok(enabled.unwrap_or(false))
    }

    /// The set of chats reminders are delivered to.
    pub async fn enabled_chat_ids(pool: &sqlx::SqlitePool) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT chat_id FROM subscribers WHERE enabled = 1 ORDER BY chat_id",
        )
        .fetch_all(pool)
        .await
    }
}
