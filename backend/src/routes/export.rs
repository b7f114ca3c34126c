//! Data export API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::export::{ExportService, UserDataExport};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/json", get(export_json))
        .route("/csv/workouts", get(export_workouts_csv))
}

/// GET /api/v1/export/json - Export all user data as JSON
async fn export_json(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserDataExport>, ApiError> {
    let export = ExportService::export_json(state.db(), auth.user_id).await?;
    Ok(Json(export))
}

/// GET /api/v1/export/csv/workouts - Export workout history as CSV
async fn export_workouts_csv(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let csv = ExportService::export_workouts_csv(state.db(), auth.user_id).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"workouts.csv\"",
            ),
        ],
        csv,
    ))
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
