//! Journal repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Journal entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JournalEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Option<i32>,
    pub workout_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a journal entry
#[derive(Debug, Clone)]
pub struct CreateJournalEntry {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Option<i32>,
    pub workout_id: Option<Uuid>,
    pub tags: Vec<String>,
}

/// Input for updating a journal entry; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateJournalEntry {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// Journal repository for database operations
pub struct JournalRepository;

impl JournalRepository {
    /// Create a new journal entry
    pub async fn create(pool: &PgPool, input: CreateJournalEntry) -> Result<JournalEntryRecord> {
        let record = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            INSERT INTO journal_entries (user_id, title, content, mood, workout_id, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, content, mood, workout_id, tags,
                      created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.mood)
        .bind(input.workout_id)
        .bind(&input.tags)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get all journal entries for a user, newest first
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<JournalEntryRecord>> {
        let records = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            SELECT id, user_id, title, content, mood, workout_id, tags,
                   created_at, updated_at
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get journal entry by ID, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<JournalEntryRecord>> {
        let record = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            SELECT id, user_id, title, content, mood, workout_id, tags,
                   created_at, updated_at
            FROM journal_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a journal entry
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateJournalEntry,
    ) -> Result<Option<JournalEntryRecord>> {
        let record = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            UPDATE journal_entries SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                mood = COALESCE($5, mood),
                tags = COALESCE($6, tags),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, mood, workout_id, tags,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.title)
        .bind(updates.content)
        .bind(updates.mood)
        .bind(updates.tags)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a journal entry
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM journal_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
