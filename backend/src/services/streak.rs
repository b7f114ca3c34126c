//! Streak service
//!
//! Applies the pure streak-advance rule to stored habit records. The
//! read-modify-write here is deliberately unguarded: two devices
//! completing the same habit concurrently race and the last writer wins.

use crate::error::ApiError;
use crate::repositories::StreakRepository;
use crate::repositories::streak::StreakRecord;
use chrono::Utc;
use fitlikeus_shared::streaks::{self, StreakChange};
use fitlikeus_shared::types::{StreakOverviewResponse, StreakResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Streak service for business logic
pub struct StreakService;

impl StreakService {
    /// All streaks for a user plus the dashboard aggregates
    pub async fn get_overview(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<StreakOverviewResponse, ApiError> {
        let records = StreakRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let active_count = records.iter().filter(|s| s.count > 0).count();
        let longest_streak = records.iter().map(|s| s.count).max().unwrap_or(0);
        let total_streak_days = records.iter().map(|s| s.count as i64).sum();

        Ok(StreakOverviewResponse {
            streaks: records.into_iter().map(|r| Self::to_response(r, None)).collect(),
            active_count,
            longest_streak,
            total_streak_days,
        })
    }

    /// Mark a habit complete for today
    ///
    /// Creates the streak at 1 when the habit has no record yet, otherwise
    /// applies the same-day / next-day / gap rule.
    pub async fn complete(
        pool: &PgPool,
        user_id: Uuid,
        habit_id: &str,
        title: Option<&str>,
    ) -> Result<StreakResponse, ApiError> {
        if habit_id.trim().is_empty() {
            return Err(ApiError::Validation("Habit id cannot be empty".to_string()));
        }

        let today = Utc::now().date_naive();

        let existing = StreakRepository::find_by_habit(pool, user_id, habit_id)
            .await
            .map_err(ApiError::Internal)?;

        let Some(record) = existing else {
            let title = title
                .map(str::to_string)
                .unwrap_or_else(|| format!("Streak for {}", habit_id));
            let created = StreakRepository::create(pool, user_id, habit_id, &title, 1, today)
                .await
                .map_err(ApiError::Internal)?;
            return Ok(Self::to_response(created, Some(StreakChange::Incremented)));
        };

        let advanced = streaks::advance(record.count, record.last_completed_date, today);

        if advanced.change == StreakChange::Unchanged {
            return Ok(Self::to_response(record, Some(StreakChange::Unchanged)));
        }

        let updated = StreakRepository::update_progress(
            pool,
            record.id,
            advanced.count,
            advanced.last_completed_date,
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(updated, Some(advanced.change)))
    }

    fn to_response(record: StreakRecord, change: Option<StreakChange>) -> StreakResponse {
        StreakResponse {
            id: record.id.to_string(),
            habit_id: record.habit_id,
            title: record.title,
            count: record.count,
            last_completed_date: record.last_completed_date,
            change,
        }
    }
}

#[cfg(test)]
mod tests {
    // The advance rule itself is property-tested in the shared crate;
    // persistence flows are covered by the integration suite
}
