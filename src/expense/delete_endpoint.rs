//! Defines the endpoint for deleting an expense by its ID.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::IntoResponse,
};
use rusqlite::Connection;
use serde_json::json;

use crate::{AppState, Error, database_id::ExpenseId};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting an expense, returns a confirmation on success.
///
/// Responds with 404 when no expense with the given ID exists.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match delete_expense(expense_id, &connection) {
        Ok(0) => Error::NotFound.into_response(),
        Ok(_) => Json(json!({ "detail": "Expense deleted" })).into_response(),
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{NewExpense, create_expense, get_expense},
    };

    use super::delete_expense;

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn delete_removes_expense() {
        let conn = get_test_connection();
        let expense = create_expense(
            NewExpense {
                title: "Lunch".to_owned(),
                amount: 12.50,
                category: "Food".to_owned(),
                date: date!(2025 - 06 - 15),
            },
            &conn,
        )
        .unwrap();

        let rows_affected = delete_expense(expense.id, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_expense(expense.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_expense_affects_no_rows() {
        let conn = get_test_connection();

        let rows_affected = delete_expense(1337, &conn).unwrap();

        assert_eq!(rows_affected, 0);
    }
}
