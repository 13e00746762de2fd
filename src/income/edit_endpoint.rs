//! Defines the endpoint for updating an income entry.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, db, income::IncomeState, response::Message};

/// The JSON body for updating an income entry.
///
/// The person an entry belongs to cannot be changed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditIncomeForm {
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(alias = "valor")]
    pub amount: Option<f64>,
}

/// An [EditIncomeForm] with every field present.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeUpdate {
    /// The new, non-blank description.
    pub description: String,
    /// The new amount, zero is allowed.
    pub amount: f64,
}

impl TryFrom<EditIncomeForm> for IncomeUpdate {
    type Error = Error;

    fn try_from(form: EditIncomeForm) -> Result<Self, Self::Error> {
        let (Some(description), Some(amount)) = (form.description, form.amount) else {
            return Err(Error::MissingIncomeFields);
        };

        if description.trim().is_empty() {
            return Err(Error::EmptyField("description"));
        }

        Ok(Self {
            description,
            amount,
        })
    }
}

/// A route handler for updating the description and amount of an income entry.
pub async fn edit_income_endpoint(
    State(state): State<IncomeState>,
    Path(income_id): Path<DatabaseId>,
    payload: Result<Json<EditIncomeForm>, JsonRejection>,
) -> Response {
    tracing::info!("Received request to update income entry {income_id}");

    let update = match payload
        .map_err(Error::from)
        .and_then(|Json(form)| IncomeUpdate::try_from(form))
    {
        Ok(update) => update,
        Err(error) => {
            tracing::warn!("Rejected update for income entry {income_id}: {error}");
            return error.into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match update_income(income_id, &update, &connection) {
        Ok(rows_affected) if rows_affected != 0 => {
            tracing::info!("Updated income entry {income_id}");
            Json(Message::new("Income entry updated successfully")).into_response()
        }
        Ok(_) => {
            tracing::warn!("Income entry {income_id} not found");
            Error::UpdateMissingIncome.into_response()
        }
        Err(error) => {
            tracing::error!("Could not update income entry {income_id}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

/// Apply `update` to the income entry `id`, returning zero if it did not exist.
pub fn update_income(
    id: DatabaseId,
    update: &IncomeUpdate,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    db::execute(
        connection,
        "UPDATE entrada SET description = ?1, amount = ?2 WHERE id = ?3",
        params![update.description, update.amount, id],
    )
    .map(|outcome| outcome.rows_affected)
}
