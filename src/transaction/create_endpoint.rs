use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    response,
    transaction::{NewTransaction, TransactionState, create_transaction},
};

const FAILURE_MESSAGE: &str = "Failed to add transaction";

/// A route handler for creating a new transaction.
///
/// The payload is not validated here. Missing fields are rejected by the
/// database and every failure is reported as a 500 with a generic message.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Response {
    let Json(new_transaction) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!("Could not parse transaction payload: {rejection}");
            return response::error(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE);
        }
    };

    let result = state
        .connection()
        .and_then(|connection| create_transaction(&new_transaction, &connection));

    match result {
        Ok(id) => {
            tracing::debug!("Created transaction {id}");
            response::message(StatusCode::CREATED, "Transaction added successfully")
        }
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            response::error(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE)
        }
    }
}
