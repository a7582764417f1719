//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// A single expense record, i.e. an event where money was spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// A short text label for the expense, e.g. "Lunch".
    pub title: String,
    /// The amount of money spent. The sign is not validated, so negative
    /// amounts can be used to record refunds.
    pub amount: f64,
    /// The category the expense belongs to, e.g. "Food", "Transport".
    pub category: String,
    /// The calendar date when the expense occurred.
    pub date: Date,
}

/// The data needed to create a new expense.
///
/// All fields are required. The ID is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewExpense {
    /// A short text label for the expense.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: String,
    /// The calendar date when the expense occurred.
    pub date: Date,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new expense in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (title, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, amount, category, date",
        )?
        .query_row(
            (
                new_expense.title,
                new_expense.amount,
                new_expense.category,
                new_expense.date,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// The API has no read-by-ID endpoint, so this is only used to check
/// stored state in tests.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] if there is some other SQL error.
#[cfg(test)]
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare("SELECT id, title, amount, category, date FROM expense WHERE id = :id")?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('expense', 0)",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_title ON expense(title);",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_category ON expense(category);",
        (),
    )?;

    // Index used by the date-windowed list and summary queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let date = row.get(4)?;

    Ok(Expense {
        id,
        title,
        amount,
        category,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
