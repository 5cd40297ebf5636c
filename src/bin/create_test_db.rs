use std::{error::Error, path::PathBuf, process::exit};

use clap::Parser;
use rusqlite::Connection;

use ledgerlite::{NewTransaction, create_transaction, get_transaction_summary, initialize_db};

/// Create and populate a database for manual testing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path for the new SQLite database, e.g. 'test.db'.
    output_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let output_path = args.output_path;

    if output_path.extension().is_none_or(|extension| extension.is_empty()) {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(&output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");
    let transactions = [
        NewTransaction::new("income", "Salary", 3200.0, "2025-01-01")
            .description(Some("January pay")),
        NewTransaction::new("expense", "Rent", 1400.0, "2025-01-02"),
        NewTransaction::new("expense", "Groceries", 182.45, "2025-01-05")
            .description(Some("Weekly shop")),
        NewTransaction::new("expense", "Transport", 60.0, "2025-01-07"),
        NewTransaction::new("income", "Freelance", 450.0, "2025-01-15")
            .description(Some("Logo design")),
    ];
    for transaction in &transactions {
        create_transaction(transaction, &conn)?;
    }

    let summary = get_transaction_summary(&conn)?;
    println!(
        "Created {} transactions: income {:.2}, expenses {:.2}",
        transactions.len(),
        summary.total_income,
        summary.total_expense
    );

    Ok(())
}
