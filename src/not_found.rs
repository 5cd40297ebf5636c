use axum::{http::StatusCode, response::Response};

use crate::response;

/// Fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    response::error(StatusCode::NOT_FOUND, "Not found")
}
