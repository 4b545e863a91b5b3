//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, interactions};
use crate::state::AppState;

/// Create the main router (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().route("/interactions", post(interactions::handle_interaction))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
