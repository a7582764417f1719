//! Defines the endpoint for the weekly expense total.

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
    window::{sum_amounts_in_window, week_window},
};

/// The state needed to compute the weekly summary.
#[derive(Debug, Clone)]
pub struct WeeklySummaryState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for WeeklySummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters selecting the week to summarise.
#[derive(Debug, Deserialize)]
pub struct WeeklySummaryQuery {
    /// The calendar year.
    pub year: i32,
    /// The week number under `%W`-style numbering, where week 1 begins on
    /// the year's first Monday.
    pub week: u8,
}

/// The weekly expense total returned to the client.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The calendar year that was summed.
    pub year: i32,
    /// The week number that was summed.
    pub week: u8,
    /// The sum of expense amounts in the week, rounded to two decimal places.
    pub total_expense: f64,
}

/// A route handler for the weekly expense total.
///
/// Sums amounts over the half-open window covering the seven days starting
/// on the Monday of the requested week. A week with no expenses sums to 0.0.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_weekly_summary_endpoint(
    State(state): State<WeeklySummaryState>,
    Query(query): Query<WeeklySummaryQuery>,
) -> impl IntoResponse {
    let window = match week_window(query.year, query.week) {
        Ok(window) => window,
        Err(error) => return error.into_response(),
    };

    let connection = state.db_connection.lock().unwrap();

    match sum_amounts_in_window(window, &connection) {
        Ok(total) => Json(WeeklySummary {
            year: query.year,
            week: query.week,
            total_expense: round_to_cents(total),
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router};

    use super::WeeklySummary;

    fn new_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize database.");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_expense(server: &TestServer, amount: f64, date: &str) {
        server
            .post("/expenses/")
            .content_type("application/json")
            .json(&json!({
                "title": "Test",
                "amount": amount,
                "category": "Misc",
                "date": date,
            }))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn weekly_summary_sums_expenses_in_week() {
        let server = new_test_server();
        // Week 23 of 2025 runs from Monday June 9 to Sunday June 15.
        create_expense(&server, 12.50, "2025-06-09").await;
        create_expense(&server, 3.25, "2025-06-15").await;

        let response = server
            .get("/expenses/summary/weekly")
            .add_query_param("year", 2025)
            .add_query_param("week", 23)
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<WeeklySummary>(),
            WeeklySummary {
                year: 2025,
                week: 23,
                total_expense: 15.75,
            }
        );
    }

    #[tokio::test]
    async fn weekly_summary_excludes_following_monday() {
        let server = new_test_server();
        create_expense(&server, 12.50, "2025-06-15").await;
        create_expense(&server, 99.99, "2025-06-16").await;

        let response = server
            .get("/expenses/summary/weekly")
            .add_query_param("year", 2025)
            .add_query_param("week", 23)
            .await;

        assert_eq!(response.json::<WeeklySummary>().total_expense, 12.50);
    }

    #[tokio::test]
    async fn weekly_summary_is_zero_for_empty_week() {
        let server = new_test_server();

        let response = server
            .get("/expenses/summary/weekly")
            .add_query_param("year", 2025)
            .add_query_param("week", 23)
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<WeeklySummary>().total_expense, 0.0);
    }
}
