//! Workout repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise: String,
    pub reps: i32,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub exercise: String,
    pub reps: i32,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a new workout entry
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, exercise, reps, notes, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, exercise, reps, notes, recorded_at, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.exercise)
        .bind(input.reps)
        .bind(&input.notes)
        .bind(input.recorded_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get the N most recent workouts for a user, newest first
    pub async fn get_recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, exercise, reps, notes, recorded_at, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY recorded_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get workouts for a user with pagination, newest first
    ///
    /// Returns (records, total_count) for paginated responses
    pub async fn get_paginated(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<WorkoutRecord>, i64)> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, exercise, reps, notes, recorded_at, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY recorded_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total_count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM workouts WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok((records, total_count))
    }

    /// Get workout by ID, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkoutRecord>> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, exercise, reps, notes, recorded_at, created_at
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a workout
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Total workout count and rep sum for a user
    pub async fn totals(pool: &PgPool, user_id: Uuid) -> Result<(i64, i64)> {
        let row = sqlx::query_as::<_, (i64, Option<i64>)>(
            r#"
            SELECT COUNT(*), SUM(reps)::BIGINT
            FROM workouts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok((row.0, row.1.unwrap_or(0)))
    }

    /// The most frequently logged exercise for a user
    pub async fn favorite_exercise(pool: &PgPool, user_id: Uuid) -> Result<Option<String>> {
        let exercise = sqlx::query_scalar::<_, String>(
            r#"
            SELECT exercise
            FROM workouts
            WHERE user_id = $1
            GROUP BY exercise
            ORDER BY COUNT(*) DESC, exercise ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(exercise)
    }

    /// Count workouts recorded at or after the given instant
    pub async fn count_since(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM workouts
            WHERE user_id = $1 AND recorded_at >= $2
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// All workouts for a user, newest first (export surface)
    pub async fn get_all(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, exercise, reps, notes, recorded_at, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
