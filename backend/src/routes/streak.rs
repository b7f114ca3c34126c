//! Streak API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::StreakService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitlikeus_shared::types::{CompleteStreakRequest, StreakOverviewResponse, StreakResponse};

/// Create streak routes
pub fn streak_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_overview))
        .route("/complete", post(complete))
}

/// GET /api/v1/streaks - All streaks plus aggregates
async fn get_overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StreakOverviewResponse>, ApiError> {
    let overview = StreakService::get_overview(state.db(), auth.user_id).await?;
    Ok(Json(overview))
}

/// POST /api/v1/streaks/complete - Mark a habit complete for today
async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CompleteStreakRequest>,
) -> Result<Json<StreakResponse>, ApiError> {
    let streak = StreakService::complete(
        state.db(),
        auth.user_id,
        &req.habit_id,
        req.title.as_deref(),
    )
    .await?;
    Ok(Json(streak))
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
