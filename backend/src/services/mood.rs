//! Mood service
//!
//! Mood logging is best-effort linked to a workout: the referenced
//! workout id is recorded as given, without existence checks, and a
//! workout without a mood is a normal state.

use crate::error::ApiError;
use crate::repositories::{CreateMood, MoodRepository};
use crate::repositories::mood::MoodRecord;
use fitlikeus_shared::types::{LogMoodRequest, MoodResponse};
use fitlikeus_shared::validation::validate_mood_score;
use sqlx::PgPool;
use uuid::Uuid;

/// Mood service for business logic
pub struct MoodService;

impl MoodService {
    /// Log a post-workout mood
    pub async fn log_mood(
        pool: &PgPool,
        user_id: Uuid,
        req: LogMoodRequest,
    ) -> Result<MoodResponse, ApiError> {
        validate_mood_score(req.score).map_err(ApiError::Validation)?;

        let input = CreateMood {
            user_id,
            workout_id: req.workout_id,
            score: req.score,
            notes: req.notes,
            recorded_at: req.recorded_at,
        };

        let record = MoodRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Get mood history for a user, newest first
    pub async fn get_history(pool: &PgPool, user_id: Uuid) -> Result<Vec<MoodResponse>, ApiError> {
        let records = MoodRepository::get_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Get the moods linked to one workout
    pub async fn get_for_workout(
        pool: &PgPool,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Result<Vec<MoodResponse>, ApiError> {
        let records = MoodRepository::get_for_workout(pool, user_id, workout_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    fn to_response(record: MoodRecord) -> MoodResponse {
        MoodResponse {
            id: record.id.to_string(),
            workout_id: record.workout_id.to_string(),
            score: record.score,
            notes: record.notes,
            recorded_at: record.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered by the integration suite
}
