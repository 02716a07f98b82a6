//! Health check endpoint

use axum::{http::StatusCode, response::IntoResponse};

use crate::api::types::{ApiResponse, Json};

/// GET /ping
///
/// Fixed payload, independent of any stored state.
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::message("pong!")))
}
