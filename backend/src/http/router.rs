//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, tracing) and creates
//! the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Only API routes are traced; liveness hits on `/` stay out of the logs.
    let api_v1 = Router::new()
        .route("/code", get(handlers::get_code))
        .layer(TraceLayer::new_for_http());

    Router::new()
        .route("/", get(handlers::root))
        .nest("/v1", api_v1)
        .layer(cors)
        .with_state(state)
}
