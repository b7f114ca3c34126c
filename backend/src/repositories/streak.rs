//! Streak repository for database operations
//!
//! The streak update is a read-modify-write with no transaction or
//! optimistic lock. Two devices completing the same habit concurrently
//! race, and the last writer wins.

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Streak record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StreakRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub habit_id: String,
    pub title: String,
    pub count: i32,
    pub last_completed_date: NaiveDate,
}

/// Streak repository for database operations
pub struct StreakRepository;

impl StreakRepository {
    /// Get all streaks for a user
    pub async fn get_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<StreakRecord>> {
        let records = sqlx::query_as::<_, StreakRecord>(
            r#"
            SELECT id, user_id, habit_id, title, count, last_completed_date
            FROM streaks
            WHERE user_id = $1
            ORDER BY habit_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find the streak for a habit, if any
    pub async fn find_by_habit(
        pool: &PgPool,
        user_id: Uuid,
        habit_id: &str,
    ) -> Result<Option<StreakRecord>> {
        let record = sqlx::query_as::<_, StreakRecord>(
            r#"
            SELECT id, user_id, habit_id, title, count, last_completed_date
            FROM streaks
            WHERE user_id = $1 AND habit_id = $2
            "#,
        )
        .bind(user_id)
        .bind(habit_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a streak record for a habit
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        habit_id: &str,
        title: &str,
        count: i32,
        last_completed_date: NaiveDate,
    ) -> Result<StreakRecord> {
        let record = sqlx::query_as::<_, StreakRecord>(
            r#"
            INSERT INTO streaks (user_id, habit_id, title, count, last_completed_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, habit_id, title, count, last_completed_date
            "#,
        )
        .bind(user_id)
        .bind(habit_id)
        .bind(title)
        .bind(count)
        .bind(last_completed_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite a streak's count and last completed date
    pub async fn update_progress(
        pool: &PgPool,
        id: Uuid,
        count: i32,
        last_completed_date: NaiveDate,
    ) -> Result<StreakRecord> {
        let record = sqlx::query_as::<_, StreakRecord>(
            r#"
            UPDATE streaks SET count = $2, last_completed_date = $3
            WHERE id = $1
            RETURNING id, user_id, habit_id, title, count, last_completed_date
            "#,
        )
        .bind(id)
        .bind(count)
        .bind(last_completed_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
}
