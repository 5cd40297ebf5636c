//! Ledgerlite is a small JSON service for keeping a personal record of
//! income and expenses.
//!
//! Transactions are stored in a SQLite database and exposed over a REST API,
//! along with an aggregate summary of total income, total expenses and the
//! resulting balance.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod not_found;
mod response;
mod routing;
mod transaction;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, TransactionSummary, create_transaction, get_all_transactions,
    get_transaction, get_transaction_summary,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Only [Error::NotFound] is meaningful to API clients. Every other variant
/// is reported to the client as a generic failure, and the details are only
/// written to the server logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use crate::Error;

    #[test]
    fn no_rows_maps_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert!(matches!(error, Error::NotFound));
    }

    #[test]
    fn other_sql_errors_are_wrapped() {
        let error = Error::from(rusqlite::Error::InvalidQuery);

        assert!(matches!(error, Error::SqlError(rusqlite::Error::InvalidQuery)));
    }
}
