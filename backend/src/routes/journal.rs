//! Journal API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::JournalService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitlikeus_shared::types::{
    CreateJournalEntryRequest, JournalEntryResponse, UpdateJournalEntryRequest,
};
use uuid::Uuid;

/// Create journal routes
pub fn journal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_entries).post(create_entry))
        .route("/:id", axum::routing::put(update_entry).delete(delete_entry))
}

/// POST /api/v1/journal - Create a journal entry
async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateJournalEntryRequest>,
) -> Result<(StatusCode, Json<JournalEntryResponse>), ApiError> {
    let entry = JournalService::create_entry(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/journal - All entries, newest first
async fn get_entries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<JournalEntryResponse>>, ApiError> {
    let entries = JournalService::get_entries(state.db(), auth.user_id).await?;
    Ok(Json(entries))
}

/// PUT /api/v1/journal/:id - Update an entry
async fn update_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJournalEntryRequest>,
) -> Result<Json<JournalEntryResponse>, ApiError> {
    let entry = JournalService::update_entry(state.db(), auth.user_id, id, req).await?;
    Ok(Json(entry))
}

/// DELETE /api/v1/journal/:id - Delete an entry
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    JournalService::delete_entry(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
