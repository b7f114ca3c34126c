//! Mood repository for database operations
//!
//! Moods reference a workout by id only. The column carries no foreign-key
//! constraint: a mood write is independent of the workout write it follows,
//! and a dangling workout with no mood is a tolerated state.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Mood record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MoodRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub score: i32,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a mood log
#[derive(Debug, Clone)]
pub struct CreateMood {
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub score: i32,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Mood repository for database operations
pub struct MoodRepository;

impl MoodRepository {
    /// Create a new mood log entry
    pub async fn create(pool: &PgPool, input: CreateMood) -> Result<MoodRecord> {
        let record = sqlx::query_as::<_, MoodRecord>(
            r#"
            INSERT INTO moods (user_id, workout_id, score, notes, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, workout_id, score, notes, recorded_at, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.workout_id)
        .bind(input.score)
        .bind(&input.notes)
        .bind(input.recorded_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get all mood logs for a user, newest first
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MoodRecord>> {
        let records = sqlx::query_as::<_, MoodRecord>(
            r#"
            SELECT id, user_id, workout_id, score, notes, recorded_at, created_at
            FROM moods
            WHERE user_id = $1
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get mood logs linked to a workout
    pub async fn get_for_workout(
        pool: &PgPool,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Result<Vec<MoodRecord>> {
        let records = sqlx::query_as::<_, MoodRecord>(
            r#"
            SELECT id, user_id, workout_id, score, notes, recorded_at, created_at
            FROM moods
            WHERE user_id = $1 AND workout_id = $2
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id)
        .bind(workout_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
