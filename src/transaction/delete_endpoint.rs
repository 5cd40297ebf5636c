use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    response,
    transaction::{TransactionState, delete_transaction, parse_transaction_id},
};

const SUCCESS_MESSAGE: &str = "Transaction deleted successfully";

/// A route handler for deleting a transaction.
///
/// Responds with 200 OK even when no transaction has the ID in the path.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(transaction_id) = parse_transaction_id(path) else {
        return response::message(StatusCode::OK, SUCCESS_MESSAGE);
    };

    let result = state
        .connection()
        .and_then(|connection| delete_transaction(transaction_id, &connection));

    match result {
        Ok(0) => {
            tracing::warn!("Tried to delete transaction {transaction_id}, but it does not exist");
            response::message(StatusCode::OK, SUCCESS_MESSAGE)
        }
        Ok(_) => response::message(StatusCode::OK, SUCCESS_MESSAGE),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            response::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete transaction",
            )
        }
    }
}
