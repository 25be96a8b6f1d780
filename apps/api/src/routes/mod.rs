pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::{self as analysis_handlers, MAX_BODY_BYTES};
use crate::auth::handlers as auth_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ping", get(health::ping_handler))
        // Auth API
        .route("/api/auth/signup", post(auth_handlers::handle_signup))
        .route("/api/auth/login", post(auth_handlers::handle_login))
        // Analysis API (bearer token required)
        .route("/api/analyze", post(analysis_handlers::handle_analyze))
        .route("/api/history", get(analysis_handlers::handle_history))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
