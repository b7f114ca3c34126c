//! Premium subscription API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::PremiumService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitlikeus_shared::types::{PremiumStatusResponse, UpgradeRequest};

/// Create premium routes
pub fn premium_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_status))
        .route("/upgrade", post(upgrade))
}

/// GET /api/v1/premium - Subscription status
async fn get_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PremiumStatusResponse>, ApiError> {
    let status = PremiumService::get_status(state.db(), auth.user_id).await?;
    Ok(Json(status))
}

/// POST /api/v1/premium/upgrade - Upgrade to the premium plan
///
/// Checkout is simulated: the plan and expiry are set directly.
async fn upgrade(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpgradeRequest>,
) -> Result<Json<PremiumStatusResponse>, ApiError> {
    let status = PremiumService::upgrade(state.db(), auth.user_id, req.period).await?;
    Ok(Json(status))
}
