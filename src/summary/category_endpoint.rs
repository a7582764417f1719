//! Defines the endpoint for last month's per-category expense totals.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::IntoResponse,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{AppState, Error};

use super::{round_to_cents, window::last_month_bounds};

/// The state needed to compute the category summary.
#[derive(Debug, Clone)]
pub struct CategorySummaryState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategorySummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// One category's total for the summary period.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The expense category.
    pub category: String,
    /// The sum of amounts in the category, rounded to two decimal places.
    pub total: f64,
}

/// Last month's expense totals grouped by category.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The summarised month as "<month name> <year>", e.g. "June 2025".
    pub month: String,
    /// Per-category totals ordered by category name. Categories with no
    /// expenses last month are omitted rather than zero-filled.
    pub category_wise_total: Vec<CategoryTotal>,
}

/// A route handler for last month's per-category totals.
///
/// "Last month" is the calendar month before the current UTC date.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_last_month_category_summary_endpoint(
    State(state): State<CategorySummaryState>,
) -> impl IntoResponse {
    let today = OffsetDateTime::now_utc().date();
    let connection = state.db_connection.lock().unwrap();

    match last_month_category_summary(today, &connection) {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Sum expense amounts grouped by category over the calendar month before
/// the one containing `today`.
///
/// Both ends of the range are inclusive. This differs from the half-open
/// monthly and weekly windows and mirrors the behaviour of the service this
/// one replaces.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
fn last_month_category_summary(
    today: Date,
    connection: &Connection,
) -> Result<CategorySummary, Error> {
    let (first_day, last_day) = last_month_bounds(today);

    let category_wise_total = connection
        .prepare(
            "SELECT category, SUM(amount) FROM expense \
             WHERE date >= ?1 AND date <= ?2 \
             GROUP BY category \
             ORDER BY category ASC",
        )?
        .query_map([first_day, last_day], |row| {
            Ok((row.get::<usize, String>(0)?, row.get::<usize, f64>(1)?))
        })?
        .map(|row_result| {
            row_result
                .map(|(category, total)| CategoryTotal {
                    category,
                    total: round_to_cents(total),
                })
                .map_err(Error::SqlError)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CategorySummary {
        month: format!("{} {}", first_day.month(), first_day.year()),
        category_wise_total,
    })
}


#[cfg(test)]
mod endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router};

    use super::CategorySummary;

    #[tokio::test]
    async fn endpoint_returns_empty_summary_for_empty_table() {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize database.");
        let server = TestServer::new(build_router(state)).expect("Could not create test server.");

        let response = server.get("/expenses/summary/last-month-category").await;

        response.assert_status_ok();
        let summary = response.json::<CategorySummary>();
        assert_eq!(summary.category_wise_total, []);
    }
}
