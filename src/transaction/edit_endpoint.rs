use axum::{
    Json, debug_handler,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};

use crate::{
    response,
    transaction::{NewTransaction, TransactionState, parse_transaction_id, update_transaction},
};

const FAILURE_MESSAGE: &str = "Failed to update transaction";
const SUCCESS_MESSAGE: &str = "Transaction updated successfully";

/// A route handler for overwriting a transaction.
///
/// Responds with 200 OK even when no transaction has the ID in the path.
#[debug_handler]
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Response {
    let Json(transaction) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!("Could not parse transaction payload: {rejection}");
            return response::error(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE);
        }
    };

    let Some(transaction_id) = parse_transaction_id(path) else {
        return response::message(StatusCode::OK, SUCCESS_MESSAGE);
    };

    let result = state
        .connection()
        .and_then(|connection| update_transaction(transaction_id, &transaction, &connection));

    match result {
        Ok(0) => {
            tracing::warn!("Update of transaction {transaction_id} returned zero rows affected");
            response::message(StatusCode::OK, SUCCESS_MESSAGE)
        }
        Ok(_) => response::message(StatusCode::OK, SUCCESS_MESSAGE),
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            response::error(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
    };
    use serde_json::{Value, json};

    use crate::transaction::{
        NewTransaction, Transaction, create_transaction, edit_endpoint::edit_transaction_endpoint,
        get_all_transactions, get_transaction, test_utils::must_create_test_state,
    };

    #[tokio::test]
    async fn can_update_transaction() {
        let state = must_create_test_state();
        let id = create_transaction(
            &NewTransaction::new("income", "Salary", 1.23, "2025-10-27").description(Some("test")),
            &state.db_connection.lock().unwrap(),
        )
        .expect("could not create test transaction");
        let want_transaction = Transaction {
            id,
            kind: json!("expense"),
            category: json!("Rent"),
            amount: json!(3.21),
            date: json!("2025-10-28"),
            description: json!("foo"),
        };
        let payload = NewTransaction::new("expense", "Rent", 3.21, "2025-10-28")
            .description(Some("foo"));

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(id.to_string())),
            Ok(Json(payload)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let got_transaction = get_transaction(id, &state.db_connection.lock().unwrap())
            .expect("could not get test transaction");
        assert_eq!(want_transaction, got_transaction);
    }

    #[tokio::test]
    async fn missing_transaction_still_responds_ok() {
        let state = must_create_test_state();
        let payload = NewTransaction::new("expense", "Rent", 3.21, "2025-10-28");

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path("404".to_owned())),
            Ok(Json(payload)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let transactions = get_all_transactions(&state.db_connection.lock().unwrap()).unwrap();
        assert!(transactions.is_empty(), "update must not create a transaction");
    }

    #[tokio::test]
    async fn missing_field_on_existing_transaction_is_internal_server_error() {
        let state = must_create_test_state();
        let id = create_transaction(
            &NewTransaction::new("income", "Salary", 1.23, "2025-10-27"),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
        let payload = NewTransaction {
            date: Value::Null,
            ..NewTransaction::new("income", "Salary", 1.23, "2025-10-27")
        };

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Ok(Path(id.to_string())),
            Ok(Json(payload)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let unchanged = get_transaction(id, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(unchanged.date, "2025-10-27");
    }
}
