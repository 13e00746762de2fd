//! Defines the endpoint for listing expense entries.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    expense::{ExpenseState, list_expenses},
};

/// A route handler that responds with every expense entry as a JSON array.
pub async fn list_expenses_endpoint(State(state): State<ExpenseState>) -> Response {
    tracing::info!("Received request to list expense entries");

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match list_expenses(&connection) {
        Ok(entries) => {
            tracing::info!("Found {} expense entries", entries.len());
            Json(entries).into_response()
        }
        Err(error) => {
            tracing::error!("Could not list expense entries: {error}");
            error.into_response()
        }
    }
}
