//! Consistency API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ConsistencyService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitlikeus_shared::types::{ConsistencyQuery, ConsistencyResponse};

/// Create consistency routes
pub fn consistency_routes() -> Router<AppState> {
    Router::new().route("/", get(get_snapshot))
}

/// GET /api/v1/consistency?days=N - Consistency snapshot
///
/// Returns the chronological display points and summary metrics for the
/// caller's most recent workouts. Defaults to a seven-day window.
async fn get_snapshot(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ConsistencyQuery>,
) -> Result<Json<ConsistencyResponse>, ApiError> {
    let snapshot =
        ConsistencyService::get_snapshot(state.db(), &state.cache, auth.user_id, query.days)
            .await?;
    Ok(Json(snapshot))
}
