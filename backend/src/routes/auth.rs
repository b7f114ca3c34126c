//! Authentication routes
//!
//! Provides endpoints for registration, login, token refresh, sign-out,
//! and the password-reset flow.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use fitlikeus_shared::types::{
    AuthTokens, LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest, RegisterRequest,
    UserProfileResponse,
};
use serde::Deserialize;
use tracing::info;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/logout", post(logout))
        .route("/password-reset", post(request_password_reset))
        .route("/password-reset/confirm", post(confirm_password_reset))
        .route("/me", axum::routing::get(get_profile))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::register(
        &state.db,
        state.jwt(),
        &req.email,
        &req.password,
        req.display_name.as_deref(),
    )
    .await?;
    Ok(Json(tokens))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// Refresh token request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh access token
///
/// POST /api/v1/auth/refresh
async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::refresh_token(&state.db, state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// Sign out
///
/// POST /api/v1/auth/logout
///
/// Tokens are stateless, so sign-out is an acknowledgement: the client
/// discards its token pair and the session ends there.
async fn logout(auth_user: AuthUser) -> StatusCode {
    info!(user_id = %auth_user.user_id, "User signed out");
    StatusCode::NO_CONTENT
}

/// Request a password-reset token
///
/// POST /api/v1/auth/password-reset
///
/// Always answers 202 so the endpoint cannot be used to probe for
/// registered emails.
async fn request_password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> ApiResult<StatusCode> {
    UserService::request_password_reset(&state.db, state.jwt(), &req.email).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Confirm a password reset
///
/// POST /api/v1/auth/password-reset/confirm
async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetConfirmRequest>,
) -> ApiResult<StatusCode> {
    UserService::confirm_password_reset(&state.db, state.jwt(), &req.token, &req.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get current user profile (requires authentication)
///
/// GET /api/v1/auth/me
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserProfileResponse>> {
    let profile = UserService::get_profile(&state.db, auth_user.user_id).await?;
    Ok(Json(profile))
}
