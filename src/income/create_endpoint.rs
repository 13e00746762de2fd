//! Defines the endpoint for creating a new income entry.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, db, income::IncomeState, response::Created};

/// The JSON body for creating an income entry.
///
/// Fields are not checked for presence here. A missing field is stored as
/// NULL, which the table's `NOT NULL` constraints reject.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeForm {
    /// Who received the money.
    #[serde(alias = "pessoa")]
    pub person: Option<String>,
    /// What the money was for.
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    /// How much was received.
    #[serde(alias = "valor")]
    pub amount: Option<f64>,
}

/// A route handler for creating a new income entry, responds with the new ID.
pub async fn create_income_endpoint(
    State(state): State<IncomeState>,
    payload: Result<Json<IncomeForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::warn!("Rejected income entry body: {rejection}");
            return Error::from(rejection).into_response();
        }
    };
    tracing::info!("Received income entry to create: {form:?}");

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_income(&form, &connection) {
        Ok(id) => {
            tracing::info!("Created income entry {id}");
            Json(Created { id }).into_response()
        }
        Err(error) => {
            tracing::error!("Could not create income entry with {form:?}: {error}");
            error.into_response()
        }
    }
}

/// Insert an income entry and return the ID SQLite generated for it.
pub fn create_income(form: &IncomeForm, connection: &Connection) -> Result<DatabaseId, Error> {
    let outcome = db::execute(
        connection,
        "INSERT INTO entrada (person, description, amount) VALUES (?1, ?2, ?3)",
        params![form.person, form.description, form.amount],
    )?;

    Ok(outcome.last_insert_id)
}
