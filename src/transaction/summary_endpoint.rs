use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    response,
    transaction::{TransactionState, TransactionSummary, get_transaction_summary},
};

/// The summary sent to clients: the totals plus the balance between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
}

impl From<TransactionSummary> for SummaryResponse {
    fn from(summary: TransactionSummary) -> Self {
        Self {
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            balance: summary.total_income - summary.total_expense,
        }
    }
}

/// A route handler that responds with total income, total expenses and the balance.
pub async fn get_summary_endpoint(State(state): State<TransactionState>) -> Response {
    let result = state
        .connection()
        .and_then(|connection| get_transaction_summary(&connection));

    match result {
        Ok(summary) => Json(SummaryResponse::from(summary)).into_response(),
        Err(error) => {
            tracing::error!("Could not retrieve transaction summary: {error}");
            response::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve summary",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};

    use crate::transaction::{
        NewTransaction, TransactionSummary, create_transaction,
        test_utils::{drop_transactions_table, must_create_test_state, must_read_error},
    };

    use super::{SummaryResponse, get_summary_endpoint};

    #[tokio::test]
    async fn responds_with_balance() {
        let state = must_create_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                &NewTransaction::new("income", "Salary", 100.0, "2025-10-27"),
                &connection,
            )
            .unwrap();
            create_transaction(
                &NewTransaction::new("expense", "Food", 40.0, "2025-10-27"),
                &connection,
            )
            .unwrap();
        }

        let response = get_summary_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");
        let summary: SummaryResponse =
            serde_json::from_slice(&body).expect("could not parse summary");
        assert_eq!(summary.balance, 60.0);
    }

    #[tokio::test]
    async fn missing_table_is_internal_server_error() {
        let state = must_create_test_state();
        drop_transactions_table(&state);

        let response = get_summary_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(must_read_error(response).await, "Failed to retrieve summary");
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let response = SummaryResponse::from(TransactionSummary {
            total_income: 125.0,
            total_expense: 40.0,
        });

        assert_eq!(response.balance, 85.0);
    }

    #[test]
    fn balance_can_be_negative() {
        let response = SummaryResponse::from(TransactionSummary {
            total_income: 10.0,
            total_expense: 40.0,
        });

        assert_eq!(response.balance, -30.0);
    }
}
