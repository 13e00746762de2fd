//! A backend for tracking personal income and expenses.
//!
//! This library provides a JSON REST API over two ledgers, income entries
//! (`/api/entrada`) and expense entries (`/api/despesa`), persisted in a
//! single SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod expense;
mod income;
mod logging;
mod not_found;
mod response;
mod routing;

pub use app_state::AppState;
pub use database_id::DatabaseId;
pub use db::{ExecuteOutcome, execute, initialize as initialize_db, open_database, query};
pub use expense::{DEFAULT_EXPENSE_TYPE, ExpenseEntry};
pub use income::IncomeEntry;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::response::{ErrorMessage, Message};

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
    /// The request body was not valid JSON or did not match the expected shape.
    #[error("invalid request body: {0}")]
    InvalidJson(String),

    /// An expense was submitted without a due date.
    #[error("the due date is required")]
    MissingDueDate,

    /// An income update was missing its description or amount.
    #[error("description and amount are required")]
    MissingIncomeFields,

    /// An expense update was missing its description, amount or expense type.
    #[error("description, amount and expense type are required")]
    MissingExpenseFields,

    /// A text field was provided but contained only whitespace.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// Tried to update an income entry that does not exist
    #[error("tried to update an income entry that is not in the database")]
    UpdateMissingIncome,

    /// Tried to delete an income entry that does not exist
    #[error("tried to delete an income entry that is not in the database")]
    DeleteMissingIncome,

    /// Tried to update an expense entry that does not exist
    #[error("tried to update an expense entry that is not in the database")]
    UpdateMissingExpense,

    /// Tried to delete an expense entry that does not exist
    #[error("tried to delete an expense entry that is not in the database")]
    DeleteMissingExpense,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    ///
    /// The message of the inner error is sent to the client as is.
    #[error("{0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJson(rejection.body_text())
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_)
            | Error::MissingDueDate
            | Error::MissingIncomeFields
            | Error::MissingExpenseFields
            | Error::EmptyField(_) => StatusCode::BAD_REQUEST,
            Error::UpdateMissingIncome
            | Error::DeleteMissingIncome
            | Error::UpdateMissingExpense
            | Error::DeleteMissingExpense => StatusCode::NOT_FOUND,
            Error::DatabaseLockError | Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Error::UpdateMissingIncome | Error::DeleteMissingIncome => {
                (status, Json(Message::new("Income entry not found"))).into_response()
            }
            Error::UpdateMissingExpense | Error::DeleteMissingExpense => {
                (status, Json(Message::new("Expense entry not found"))).into_response()
            }
            Error::SqlError(error) => {
                (status, Json(ErrorMessage::new(error.to_string()))).into_response()
            }
            error @ Error::DatabaseLockError => {
                (status, Json(ErrorMessage::new(error.to_string()))).into_response()
            }
            error => (status, Json(Message::new(error.to_string()))).into_response(),
        }
    }
}
