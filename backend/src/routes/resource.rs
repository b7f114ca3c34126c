//! Resource catalog API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ResourceService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitlikeus_shared::types::ResourceResponse;

/// Create resource routes
pub fn resource_routes() -> Router<AppState> {
    Router::new().route("/", get(list_resources))
}

/// GET /api/v1/resources - The full catalog
///
/// Premium entries are returned locked, with link and content withheld,
/// unless the caller's plan grants access.
async fn list_resources(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ResourceResponse>>, ApiError> {
    let resources = ResourceService::list_for_user(state.db(), auth.user_id).await?;
    Ok(Json(resources))
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
