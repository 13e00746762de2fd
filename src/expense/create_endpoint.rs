//! Defines the endpoint for creating a new expense entry.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    database_id::DatabaseId,
    db,
    expense::{DEFAULT_EXPENSE_TYPE, ExpenseState},
    response::Created,
};

/// The JSON body for creating an expense entry.
///
/// Only the due date is checked before inserting. The remaining fields are
/// left to the table's constraints, as for income entries.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    #[serde(alias = "pessoa")]
    pub person: Option<String>,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(alias = "valor")]
    pub amount: Option<f64>,
    /// Falls back to [DEFAULT_EXPENSE_TYPE] when missing, empty or only whitespace.
    #[serde(alias = "tipoDespesa")]
    pub expense_type: Option<String>,
    /// Must be a `YYYY-MM-DD` date.
    #[serde(alias = "vencimento")]
    pub due_date: Option<Date>,
}

/// A route handler for creating a new expense entry, responds with the new ID.
pub async fn create_expense_endpoint(
    State(state): State<ExpenseState>,
    payload: Result<Json<ExpenseForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::warn!("Rejected expense entry body: {rejection}");
            return Error::from(rejection).into_response();
        }
    };
    tracing::info!("Received expense entry to create: {form:?}");

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_expense(&form, &connection) {
        Ok(id) => {
            tracing::info!("Created expense entry {id}");
            Json(Created { id }).into_response()
        }
        Err(Error::MissingDueDate) => {
            tracing::warn!("Rejected expense entry without a due date: {form:?}");
            Error::MissingDueDate.into_response()
        }
        Err(error) => {
            tracing::error!("Could not create expense entry with {form:?}: {error}");
            error.into_response()
        }
    }
}

/// Insert an expense entry and return the ID SQLite generated for it.
///
/// # Errors
/// Returns [Error::MissingDueDate] without touching the database if the form
/// has no due date.
pub fn create_expense(form: &ExpenseForm, connection: &Connection) -> Result<DatabaseId, Error> {
    let due_date = form.due_date.ok_or(Error::MissingDueDate)?;

    let expense_type = form
        .expense_type
        .as_deref()
        .filter(|expense_type| !expense_type.trim().is_empty())
        .unwrap_or(DEFAULT_EXPENSE_TYPE);

    let outcome = db::execute(
        connection,
        "INSERT INTO despesa (person, description, amount, expense_type, due_date) \
        VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            form.person,
            form.description,
            form.amount,
            expense_type,
            due_date
        ],
    )?;

    Ok(outcome.last_insert_id)
}
