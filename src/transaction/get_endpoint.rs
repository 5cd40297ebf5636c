use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error, response,
    transaction::{TransactionState, get_transaction, parse_transaction_id},
};

const NOT_FOUND_MESSAGE: &str = "Transaction not found";

/// A route handler that responds with a single transaction, or 404 if it does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(transaction_id) = parse_transaction_id(path) else {
        return response::error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE);
    };

    let result = state
        .connection()
        .and_then(|connection| get_transaction(transaction_id, &connection));

    match result {
        Ok(transaction) => Json(transaction).into_response(),
        Err(Error::NotFound) => response::error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        Err(error) => {
            tracing::error!("Could not retrieve transaction {transaction_id}: {error}");
            response::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve transaction",
            )
        }
    }
}
