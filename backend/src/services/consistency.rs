//! Consistency service
//!
//! Fetches the most recent workout window and runs the shared
//! consistency computation over it. The default window's snapshot is
//! cached in Redis for five minutes, the staleness the dashboard
//! tolerates; other window sizes are computed fresh.

use crate::cache;
use crate::error::ApiError;
use crate::repositories::WorkoutRepository;
use chrono::Utc;
use fitlikeus_shared::consistency::{self, WorkoutSample, DEFAULT_WINDOW_DAYS};
use fitlikeus_shared::types::ConsistencyResponse;
use redis::aio::ConnectionManager;
use sqlx::PgPool;
use uuid::Uuid;

/// Largest window a caller may request
const MAX_WINDOW_DAYS: u32 = 31;

/// Consistency service for business logic
pub struct ConsistencyService;

impl ConsistencyService {
    /// Compute the consistency snapshot for a user
    pub async fn get_snapshot(
        pool: &PgPool,
        redis: &Option<ConnectionManager>,
        user_id: Uuid,
        days: Option<u32>,
    ) -> Result<ConsistencyResponse, ApiError> {
        let days = days.unwrap_or(DEFAULT_WINDOW_DAYS).clamp(1, MAX_WINDOW_DAYS);
        let cacheable = days == DEFAULT_WINDOW_DAYS;
        let key = cache::consistency_key(user_id, days);

        if cacheable {
            if let Some(cached) = cache::get_json::<ConsistencyResponse>(redis, &key).await {
                return Ok(cached);
            }
        }

        let records = WorkoutRepository::get_recent(pool, user_id, days as i64)
            .await
            .map_err(ApiError::Internal)?;

        let samples: Vec<WorkoutSample> = records
            .iter()
            .map(|r| WorkoutSample {
                recorded_at: r.recorded_at,
                reps: r.reps,
            })
            .collect();

        let today = Utc::now().date_naive();
        let response = ConsistencyResponse {
            points: consistency::window_points(&samples),
            metrics: consistency::compute_metrics(&samples, today, days),
        };

        if cacheable {
            cache::set_json(redis, &key, &response, cache::CONSISTENCY_TTL_SECS).await;
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamp() {
        // Mirrors the clamp applied in get_snapshot
        assert_eq!(365u32.clamp(1, MAX_WINDOW_DAYS), MAX_WINDOW_DAYS);
        assert_eq!(0u32.clamp(1, MAX_WINDOW_DAYS), 1);
        assert_eq!(
            DEFAULT_WINDOW_DAYS.clamp(1, MAX_WINDOW_DAYS),
            DEFAULT_WINDOW_DAYS
        );
    }
}
