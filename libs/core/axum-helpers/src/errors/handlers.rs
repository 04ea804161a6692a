use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback for unmatched routes, rendered in the standard error envelope.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");

    let body = ErrorResponse::new(
        ErrorCode::RouteNotFound,
        format!("No route for {}", uri.path()),
    );

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
