//! Transactions: the model, the database queries and the JSON endpoints.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod summary;
mod summary_endpoint;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{FromRef, Path, rejection::PathRejection};
use rusqlite::Connection;

pub use self::core::{
    NewTransaction, RowsAffected, Transaction, create_transaction, create_transaction_table,
    delete_transaction, get_all_transactions, get_transaction, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use summary::{TransactionSummary, get_transaction_summary};
pub use summary_endpoint::{SummaryResponse, get_summary_endpoint};

use crate::{AppState, Error, database_id::TransactionId};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl TransactionState {
    /// Lock the database connection.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the lock is poisoned.
    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

/// Extract the transaction ID from the path.
///
/// A segment that does not convert to an integer cannot refer to a stored
/// transaction, so it is treated like any other missing ID.
fn parse_transaction_id(path: Result<Path<String>, PathRejection>) -> Option<TransactionId> {
    let segment = match path {
        Ok(Path(segment)) => segment,
        Err(rejection) => {
            tracing::warn!("Invalid transaction ID in path: {rejection}");
            return None;
        }
    };

    let id = to_integer_id(&segment);
    if id.is_none() {
        tracing::debug!("Transaction ID {segment:?} is not an integer");
    }

    id
}

/// Convert `text` to an ID the same way SQLite converts text compared
/// against an `INTEGER` column: surrounding whitespace is ignored and real
/// numbers are accepted when they hold an exact integer, e.g. "1.0" or "1e2".
fn to_integer_id(text: &str) -> Option<TransactionId> {
    let text = text.trim();

    if let Ok(id) = text.parse::<TransactionId>() {
        return Some(id);
    }

    // 2^63, the first real number that does not fit in an i64.
    const UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

    match text.parse::<f64>() {
        Ok(real)
            if real.is_finite()
                && real.fract() == 0.0
                && real >= -UPPER_BOUND
                && real < UPPER_BOUND =>
        {
            Some(real as TransactionId)
        }
        _ => None,
    }
}


#[cfg(test)]
pub(crate) mod test_utils {
    use std::sync::{Arc, Mutex};

    use axum::response::Response;
    use rusqlite::Connection;

    use crate::{db::initialize, response::ErrorBody};

    use super::TransactionState;

    pub fn drop_transactions_table(state: &TransactionState) {
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE transactions", ())
            .expect("could not drop transactions table");
    }

    /// Read the text of an `{"error": ...}` response body.
    pub async fn must_read_error(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");

        serde_json::from_slice::<ErrorBody>(&body)
            .expect("response body is not an error")
            .error
    }

    pub fn must_create_test_state() -> TransactionState {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize(&connection).expect("could not initialize test DB");

        TransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }
}
