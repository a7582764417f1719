//! Defines the endpoint for listing expenses with an optional date filter.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::IntoResponse,
};
use rusqlite::{Connection, ToSql};
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error};

use super::core::{Expense, map_expense_row};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ListExpensesState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for filtering the expense list.
///
/// Both bounds are inclusive and independently optional.
#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    /// Keep only expenses dated on or after this date.
    pub from_date: Option<Date>,
    /// Keep only expenses dated on or before this date.
    pub to_date: Option<Date>,
}

/// A route handler for listing expenses, optionally bounded by an inclusive
/// date range.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_expenses_endpoint(
    State(state): State<ListExpensesState>,
    Query(query): Query<ListExpensesQuery>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match list_expenses(query.from_date, query.to_date, &connection) {
        Ok(expenses) => Json(expenses).into_response(),
        Err(error) => error.into_response(),
    }
}

fn list_expenses(
    from_date: Option<Date>,
    to_date: Option<Date>,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    let mut clauses = Vec::new();
    let mut params: Vec<&dyn ToSql> = Vec::new();

    if let Some(ref from_date) = from_date {
        clauses.push("date >= ?");
        params.push(from_date);
    }

    if let Some(ref to_date) = to_date {
        clauses.push("date <= ?");
        params.push(to_date);
    }

    let filter = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {} ", clauses.join(" AND "))
    };

    // Sort by date, and then ID to keep the listing order stable.
    let query = format!(
        "SELECT id, title, amount, category, date FROM expense {filter}ORDER BY date ASC, id ASC"
    );

    connection
        .prepare(&query)?
        .query_map(params.as_slice(), map_expense_row)?
        .map(|expense_result| expense_result.map_err(Error::SqlError))
        .collect()
}
