//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, delete_expense_endpoint, get_expenses_endpoint},
    summary::{
        get_last_month_category_summary_endpoint, get_monthly_summary_endpoint,
        get_weekly_summary_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route permits cross-origin calls from any origin, with any method
/// and headers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::EXPENSES,
            post(create_expense_endpoint).get(get_expenses_endpoint),
        )
        .route(endpoints::EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::MONTHLY_SUMMARY, get(get_monthly_summary_endpoint))
        .route(endpoints::WEEKLY_SUMMARY, get(get_weekly_summary_endpoint))
        .route(
            endpoints::LAST_MONTH_CATEGORY_SUMMARY,
            get(get_last_month_category_summary_endpoint),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
