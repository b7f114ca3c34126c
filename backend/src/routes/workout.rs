//! Workout API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitlikeus_shared::types::{
    LogWorkoutRequest, WorkoutHistoryQuery, WorkoutHistoryResponse, WorkoutResponse,
    WorkoutStatsResponse,
};
use uuid::Uuid;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history).post(log_workout))
        .route("/stats", get(get_stats))
        .route("/:id", axum::routing::delete(delete_workout))
}

/// POST /api/v1/workouts - Log a workout
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutResponse>), ApiError> {
    let workout =
        WorkoutService::log_workout(state.db(), &state.cache, auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts - Get workout history with pagination
///
/// Returns entries newest first. Supports limit (default: 50, max: 100)
/// and offset parameters.
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WorkoutHistoryQuery>,
) -> Result<Json<WorkoutHistoryResponse>, ApiError> {
    let (limit, offset) = query.normalize();
    let history = WorkoutService::get_history(state.db(), auth.user_id, limit, offset).await?;
    Ok(Json(history))
}

/// GET /api/v1/workouts/stats - Aggregate workout statistics
async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<WorkoutStatsResponse>, ApiError> {
    let stats = WorkoutService::get_stats(state.db(), auth.user_id).await?;
    Ok(Json(stats))
}

/// DELETE /api/v1/workouts/:id - Delete a workout
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    WorkoutService::delete_workout(state.db(), &state.cache, auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
