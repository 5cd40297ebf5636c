//! Aggregate totals over all transactions.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::Error;

/// The total income and expenses across every transaction.
///
/// The balance is left to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// The sum of the amounts of "income" transactions.
    pub total_income: f64,
    /// The sum of the amounts of "expense" transactions.
    pub total_expense: f64,
}

/// Sum income and expense amounts in a single pass over the transactions table.
///
/// Transactions with any other type are ignored. Both totals are zero when
/// there are no matching transactions.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transaction_summary(connection: &Connection) -> Result<TransactionSummary, Error> {
    connection
        .query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN type = 'income' THEN amount ELSE 0.0 END), 0.0),
                COALESCE(SUM(CASE WHEN type = 'expense' THEN amount ELSE 0.0 END), 0.0)
            FROM transactions",
            [],
            |row| {
                Ok(TransactionSummary {
                    total_income: row.get(0)?,
                    total_expense: row.get(1)?,
                })
            },
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        transaction::{NewTransaction, TransactionSummary, create_transaction},
    };

    use super::get_transaction_summary;

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn insert(kind: &str, amount: f64, conn: &Connection) {
        create_transaction(&NewTransaction::new(kind, "Test", amount, "2025-10-05"), conn)
            .expect("could not create transaction");
    }

    #[test]
    fn sums_income_and_expense_separately() {
        let conn = get_test_connection();
        insert("income", 100.0, &conn);
        insert("expense", 40.0, &conn);
        insert("income", 25.0, &conn);

        let summary = get_transaction_summary(&conn).expect("could not get summary");

        assert_eq!(
            summary,
            TransactionSummary {
                total_income: 125.0,
                total_expense: 40.0,
            }
        );
    }

    #[test]
    fn empty_table_gives_zero_totals() {
        let conn = get_test_connection();

        let summary = get_transaction_summary(&conn).expect("could not get summary");

        assert_eq!(summary, TransactionSummary::default());
    }

    #[test]
    fn only_expenses_gives_zero_income() {
        let conn = get_test_connection();
        insert("expense", 12.5, &conn);

        let summary = get_transaction_summary(&conn).unwrap();

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 12.5);
    }

    #[test]
    fn ignores_unknown_types() {
        let conn = get_test_connection();
        insert("income", 10.0, &conn);
        insert("transfer", 1000.0, &conn);

        let summary = get_transaction_summary(&conn).unwrap();

        assert_eq!(summary.total_income, 10.0);
        assert_eq!(summary.total_expense, 0.0);
    }
}
