//! Workout service
//!
//! Business logic for workout logging, history, and aggregate statistics.
//! Writing or deleting a workout invalidates the cached consistency
//! snapshot so the dashboard never shows a stale streak for longer than
//! one read.

use crate::cache;
use crate::error::ApiError;
use crate::repositories::{CreateWorkout, WorkoutRepository};
use crate::repositories::workout::WorkoutRecord;
use chrono::{Datelike, Duration, TimeZone, Utc};
use fitlikeus_shared::consistency::DEFAULT_WINDOW_DAYS;
use fitlikeus_shared::models::Exercise;
use fitlikeus_shared::types::{
    LogWorkoutRequest, WorkoutHistoryResponse, WorkoutResponse, WorkoutStatsResponse,
};
use fitlikeus_shared::validation::validate_reps;
use redis::aio::ConnectionManager;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// Log a workout entry
    pub async fn log_workout(
        pool: &PgPool,
        redis: &Option<ConnectionManager>,
        user_id: Uuid,
        req: LogWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        validate_reps(req.reps).map_err(ApiError::Validation)?;

        let input = CreateWorkout {
            user_id,
            exercise: req.exercise.to_string(),
            reps: req.reps,
            notes: req.notes,
            recorded_at: req.recorded_at,
        };

        let record = WorkoutRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Self::invalidate_consistency(redis, user_id).await;

        Self::to_response(record)
    }

    /// Get paginated workout history, newest first
    pub async fn get_history(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<WorkoutHistoryResponse, ApiError> {
        let (records, total_count) = WorkoutRepository::get_paginated(pool, user_id, limit, offset)
            .await
            .map_err(ApiError::Internal)?;

        let items: Vec<WorkoutResponse> = records
            .into_iter()
            .map(Self::to_response)
            .collect::<Result<_, _>>()?;

        let has_more = offset + (items.len() as i64) < total_count;

        Ok(WorkoutHistoryResponse {
            items,
            total_count,
            limit,
            offset,
            has_more,
        })
    }

    /// Delete a workout
    pub async fn delete_workout(
        pool: &PgPool,
        redis: &Option<ConnectionManager>,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, workout_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        Self::invalidate_consistency(redis, user_id).await;
        Ok(())
    }

    /// Aggregate workout statistics for the dashboard
    ///
    /// "This week" is a rolling seven-day window; "this month" starts at
    /// the first of the current calendar month.
    pub async fn get_stats(pool: &PgPool, user_id: Uuid) -> Result<WorkoutStatsResponse, ApiError> {
        let (total_workouts, total_reps) = WorkoutRepository::totals(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let favorite_exercise = WorkoutRepository::favorite_exercise(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .and_then(|s| s.parse::<Exercise>().ok());

        let now = Utc::now();
        let week_ago = now - Duration::days(7);
        let month_start = Utc
            .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .unwrap_or(now);

        let this_week = WorkoutRepository::count_since(pool, user_id, week_ago)
            .await
            .map_err(ApiError::Internal)?;
        let this_month = WorkoutRepository::count_since(pool, user_id, month_start)
            .await
            .map_err(ApiError::Internal)?;

        Ok(WorkoutStatsResponse {
            total_workouts,
            total_reps,
            favorite_exercise,
            this_week,
            this_month,
        })
    }

    /// Drop the cached consistency snapshot for the user
    ///
    /// Only the default window is ever cached, so one key suffices.
    async fn invalidate_consistency(redis: &Option<ConnectionManager>, user_id: Uuid) {
        cache::invalidate(redis, &cache::consistency_key(user_id, DEFAULT_WINDOW_DAYS)).await;
    }

    fn to_response(record: WorkoutRecord) -> Result<WorkoutResponse, ApiError> {
        let exercise = record
            .exercise
            .parse::<Exercise>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

        Ok(WorkoutResponse {
            id: record.id.to_string(),
            exercise,
            reps: record.reps,
            notes: record.notes,
            recorded_at: record.recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered by the integration suite
}
