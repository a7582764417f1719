//! Defines the endpoint for the monthly expense total.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::IntoResponse,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::AppState;

use super::{
    round_to_cents,
    window::{month_window, sum_amounts_in_window},
};

/// The state needed to compute the monthly summary.
#[derive(Debug, Clone)]
pub struct MonthlySummaryState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MonthlySummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters selecting the month to summarise.
#[derive(Debug, Deserialize)]
pub struct MonthlySummaryQuery {
    /// The calendar year.
    pub year: i32,
    /// The month number, 1-12.
    pub month: u8,
}

/// The monthly expense total returned to the client.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The calendar year that was summed.
    pub year: i32,
    /// The month number that was summed.
    pub month: u8,
    /// The sum of expense amounts in the month, rounded to two decimal places.
    pub total_expense: f64,
}

/// A route handler for the monthly expense total.
///
/// Sums amounts over the half-open window from the first day of the month up
/// to, but excluding, the first day of the following month. A month with no
/// expenses sums to 0.0.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_monthly_summary_endpoint(
    State(state): State<MonthlySummaryState>,
    Query(query): Query<MonthlySummaryQuery>,
) -> impl IntoResponse {
    let window = match month_window(query.year, query.month) {
        Ok(window) => window,
        Err(error) => return error.into_response(),
    };

    let connection = state.db_connection.lock().unwrap();

    match sum_amounts_in_window(window, &connection) {
        Ok(total) => Json(MonthlySummary {
            year: query.year,
            month: query.month,
            total_expense: round_to_cents(total),
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
