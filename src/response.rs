//! JSON bodies for acknowledgements and errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Acknowledges that a request succeeded, e.g. `{"message": "Transaction added successfully"}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

/// Reports that a request failed, e.g. `{"error": "Transaction not found"}`.
///
/// The text is intentionally generic. Error details belong in the server logs.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Respond with `status_code` and a `{"message": ...}` body.
#[inline]
pub fn message(status_code: StatusCode, message: &str) -> Response {
    (
        status_code,
        Json(MessageBody {
            message: message.to_owned(),
        }),
    )
        .into_response()
}

/// Respond with `status_code` and an `{"error": ...}` body.
#[inline]
pub fn error(status_code: StatusCode, error: &str) -> Response {
    (
        status_code,
        Json(ErrorBody {
            error: error.to_owned(),
        }),
    )
        .into_response()
}
