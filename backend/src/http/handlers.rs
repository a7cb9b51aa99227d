//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{Airport, CodeQuery, BANNER};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Liveness
// =============================================================================

/// GET /
///
/// Plain text banner confirming the service is up.
pub async fn root() -> &'static str {
    BANNER
}

// =============================================================================
// Location codes
// =============================================================================

/// GET /v1/code?cc=..&lat=..&lng=..&radius=..
///
/// Nearest coded airports for a point, best first. Input is validated before
/// the directory is touched.
pub async fn get_code(
    State(state): State<AppState>,
    Query(params): Query<CodeQuery>,
) -> HandlerResult<Vec<Airport>> {
    let query = params.parse()?;

    // Directory scan and ranking are CPU-bound; keep them off the async workers.
    let service = state.service.clone();
    let airports = tokio::task::spawn_blocking(move || service.resolve_query(&query))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(airports))
}
