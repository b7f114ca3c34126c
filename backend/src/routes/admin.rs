//! Admin API routes
//!
//! Every handler takes the AdminUser extractor, so the whole surface is
//! role-gated server-side.

use crate::auth::AdminUser;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::services::{ResourceService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitlikeus_shared::types::{
    CreateResourceRequest, ResourceResponse, UpdateResourceRequest, UserProfileResponse,
};
use uuid::Uuid;

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/resources", post(create_resource))
        .route(
            "/resources/:id",
            axum::routing::put(update_resource).delete(delete_resource),
        )
}

/// GET /api/v1/admin/users - List all user profiles
async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<UserProfileResponse>>, ApiError> {
    let users = UserRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;

    let profiles: Vec<UserProfileResponse> = users
        .into_iter()
        .map(UserService::profile_response)
        .collect::<Result<_, _>>()?;

    Ok(Json(profiles))
}

/// POST /api/v1/admin/resources - Create a catalog resource
async fn create_resource(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    let resource = ResourceService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// PUT /api/v1/admin/resources/:id - Update a catalog resource
async fn update_resource(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResourceRequest>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource = ResourceService::update(state.db(), id, req).await?;
    Ok(Json(resource))
}

/// DELETE /api/v1/admin/resources/:id - Delete a catalog resource
async fn delete_resource(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ResourceService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    // Route tests will be added as integration tests
}
