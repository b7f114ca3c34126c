//! Mood API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::MoodService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitlikeus_shared::types::{LogMoodRequest, MoodResponse};
use uuid::Uuid;

/// Create mood routes
pub fn mood_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history).post(log_mood))
        .route("/workout/:workout_id", get(get_for_workout))
}

/// POST /api/v1/moods - Log a post-workout mood
///
/// The workout link is best-effort: the referenced id is stored as given
/// and is not checked against the workouts table.
async fn log_mood(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogMoodRequest>,
) -> Result<(StatusCode, Json<MoodResponse>), ApiError> {
    let mood = MoodService::log_mood(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(mood)))
}

/// GET /api/v1/moods - Get mood history
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MoodResponse>>, ApiError> {
    let moods = MoodService::get_history(state.db(), auth.user_id).await?;
    Ok(Json(moods))
}

/// GET /api/v1/moods/workout/:workout_id - Moods linked to one workout
async fn get_for_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workout_id): Path<Uuid>,
) -> Result<Json<Vec<MoodResponse>>, ApiError> {
    let moods = MoodService::get_for_workout(state.db(), auth.user_id, workout_id).await?;
    Ok(Json(moods))
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
