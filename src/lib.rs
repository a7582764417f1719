//! A small REST API for recording personal expenses and summarising them by
//! month, week, and category.
//!
//! This library provides the router, the SQLite-backed storage functions, and
//! the date-window logic behind the summary endpoints. The `server` binary
//! wires it all up.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod expense;
mod routing;
mod summary;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use expense::{Expense, NewExpense};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested expense could not be found.
    ///
    /// The client should check that the ID is correct and that the expense
    /// has not already been deleted.
    #[error("the requested expense could not be found")]
    NotFound,

    /// A month number outside 1-12 was given to the monthly summary.
    #[error("{0} is not a valid month number, expected a value from 1 to 12")]
    InvalidMonth(u8),

    /// A year outside the supported calendar range was given to a summary.
    #[error("{0} is outside the supported year range")]
    InvalidYear(i32),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Error::NotFound => (StatusCode::NOT_FOUND, "Expense not found".to_owned()),
            Error::InvalidMonth(_) | Error::InvalidYear(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            // Storage errors are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
