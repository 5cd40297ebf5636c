use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    response,
    transaction::{TransactionState, get_all_transactions},
};

/// A route handler that responds with every transaction as a JSON array.
pub async fn get_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    let result = state
        .connection()
        .and_then(|connection| get_all_transactions(&connection));

    match result {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("Could not retrieve transactions: {error}");
            response::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve transactions",
            )
        }
    }
}
