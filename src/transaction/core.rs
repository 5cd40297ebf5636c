//! Defines the core data models and database queries for transactions.

use rusqlite::{
    Connection, Row, params,
    types::{Value as SqlValue, ValueRef},
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Apart from the ID, fields hold whatever SQLite stored for them. A column
/// only converts a value when it can do so losslessly (e.g. `"12.5"` in the
/// amount column becomes `12.5`), so older rows may hold unexpected types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// Either "income" or "expense".
    ///
    /// Any other value is stored as-is, but is then ignored by the summary.
    #[serde(rename = "type")]
    pub kind: Value,
    /// A free-form label, e.g. "Groceries".
    pub category: Value,
    /// The amount of money spent or earned.
    pub amount: Value,
    /// When the transaction happened, exactly as the client wrote it.
    pub date: Value,
    /// A text description of what the transaction was for.
    pub description: Value,
}

/// The fields a client sends to create or overwrite a transaction.
///
/// Fields are passed to the database untouched. Missing fields become
/// `NULL` and are rejected by the `NOT NULL` constraints, and the column
/// types decide what happens to everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTransaction {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Value,
    /// A free-form label, e.g. "Groceries".
    pub category: Value,
    /// The amount of money spent or earned.
    pub amount: Value,
    /// When the transaction happened.
    pub date: Value,
    /// A text description of what the transaction was for.
    pub description: Value,
}

impl NewTransaction {
    /// Create a complete payload without a description.
    pub fn new(kind: &str, category: &str, amount: f64, date: &str) -> Self {
        Self {
            kind: Value::from(kind),
            category: Value::from(category),
            amount: Value::from(amount),
            date: Value::from(date),
            description: Value::Null,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map_or(Value::Null, Value::from);
        self
    }

    /// The fields in column order: type, category, amount, date, description.
    fn to_sql_values(&self) -> [SqlValue; 5] {
        [
            to_sql_value(&self.kind),
            to_sql_value(&self.category),
            to_sql_value(&self.amount),
            to_sql_value(&self.date),
            to_sql_value(&self.description),
        ]
    }
}

/// The number of rows changed by an `UPDATE` or `DELETE`.
pub type RowsAffected = usize;

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Create a new transaction in the database and return its ID.
///
/// The type is not checked against "income" and "expense".
///
/// # Errors
/// This function will return a [Error::SqlError] if a required field is
/// missing or there is some other SQL error.
pub fn create_transaction(
    transaction: &NewTransaction,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    let [kind, category, amount, date, description] = transaction.to_sql_values();

    let id = connection
        .prepare(
            "INSERT INTO transactions (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id",
        )?
        .query_row(params![kind, category, amount, date, description], |row| {
            row.get(0)
        })?;

    Ok(id)
}

/// Retrieve every transaction in the order the database stores them.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, type, category, amount, date, description FROM transactions")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Overwrite every field except the ID of the transaction `id`.
///
/// A missing `id` is not an error, the caller gets zero rows affected.
///
/// # Errors
/// This function will return a [Error::SqlError] if a required field is
/// missing or there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    transaction: &NewTransaction,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    let [kind, category, amount, date, description] = transaction.to_sql_values();

    connection
        .execute(
            "UPDATE transactions \
            SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5 \
            WHERE id = ?6",
            params![kind, category, amount, date, description, id],
        )
        .map_err(Error::from)
}

/// Delete the transaction `id`.
///
/// A missing `id` is not an error, the caller gets zero rows affected.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        kind: from_sql_value(row.get_ref(1)?),
        category: from_sql_value(row.get_ref(2)?),
        amount: from_sql_value(row.get_ref(3)?),
        date: from_sql_value(row.get_ref(4)?),
        description: from_sql_value(row.get_ref(5)?),
    })
}

// ============================================================================
// VALUE CONVERSION
// ============================================================================

/// Convert a JSON value into the SQLite value it is bound as.
///
/// Booleans are bound as 1 and 0. Arrays and objects are bound as their JSON text.
fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(flag) => SqlValue::Integer(i64::from(*flag)),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => SqlValue::Integer(integer),
            None => number.as_f64().map_or(SqlValue::Null, SqlValue::Real),
        },
        Value::String(text) => SqlValue::Text(text.clone()),
        Value::Array(_) | Value::Object(_) => SqlValue::Text(value.to_string()),
    }
}

/// Convert a stored SQLite value into JSON, whatever its storage class.
fn from_sql_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(integer) => Value::from(integer),
        ValueRef::Real(real) => Number::from_f64(real).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
