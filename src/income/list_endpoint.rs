//! Defines the endpoint for listing income entries.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    income::{IncomeState, list_income},
};

/// A route handler that responds with every income entry as a JSON array.
pub async fn list_income_endpoint(State(state): State<IncomeState>) -> Response {
    tracing::info!("Received request to list income entries");

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match list_income(&connection) {
        Ok(entries) => {
            tracing::info!("Found {} income entries", entries.len());
            Json(entries).into_response()
        }
        Err(error) => {
            tracing::error!("Could not list income entries: {error}");
            error.into_response()
        }
    }
}
