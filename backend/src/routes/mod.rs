//! Route definitions for the FitLikeUs API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod admin;
mod auth;
mod consistency;
mod export;
mod health;
mod journal;
mod mood;
mod premium;
mod resource;
mod streak;
mod workout;

pub use admin::admin_routes;
pub use auth::auth_routes;
pub use consistency::consistency_routes;
pub use export::export_routes;
pub use journal::journal_routes;
pub use mood::mood_routes;
pub use premium::premium_routes;
pub use resource::resource_routes;
pub use streak::streak_routes;
pub use workout::workout_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitLikeUs API v1" }))
        .nest("/auth", auth::auth_routes())
        .nest("/workouts", workout::workout_routes())
        .nest("/moods", mood::mood_routes())
        .nest("/consistency", consistency::consistency_routes())
        .nest("/streaks", streak::streak_routes())
        .nest("/journal", journal::journal_routes())
        .nest("/resources", resource::resource_routes())
        .nest("/premium", premium::premium_routes())
        .nest("/admin", admin::admin_routes())
        .nest("/export", export::export_routes())
}
