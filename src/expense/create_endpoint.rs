//! Defines the endpoint for creating a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::IntoResponse,
};
use rusqlite::Connection;

use crate::AppState;

use super::core::{NewExpense, create_expense};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for storing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new expense, returns the stored record
/// including its assigned ID.
///
/// Missing or mistyped fields in the JSON body are rejected by the extractor
/// before this handler runs.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Json(new_expense): Json<NewExpense>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match create_expense(new_expense, &connection) {
        Ok(expense) => Json(expense).into_response(),
        Err(error) => error.into_response(),
    }
}
