//! Defines the endpoint for updating an expense entry.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, db, expense::ExpenseState, response::Message};

/// The JSON body for updating an expense entry.
///
/// The person and due date of an expense cannot be changed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditExpenseForm {
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(alias = "valor")]
    pub amount: Option<f64>,
    #[serde(alias = "tipoDespesa")]
    pub expense_type: Option<String>,
}

/// An [EditExpenseForm] with every field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseUpdate {
    /// The new, non-blank description.
    pub description: String,
    /// The new amount, zero is allowed.
    pub amount: f64,
    /// The new, non-blank expense type.
    pub expense_type: String,
}

impl TryFrom<EditExpenseForm> for ExpenseUpdate {
    type Error = Error;

    fn try_from(form: EditExpenseForm) -> Result<Self, Self::Error> {
        let (Some(description), Some(amount), Some(expense_type)) =
            (form.description, form.amount, form.expense_type)
        else {
            return Err(Error::MissingExpenseFields);
        };

        if description.trim().is_empty() {
            return Err(Error::EmptyField("description"));
        }

        if expense_type.trim().is_empty() {
            return Err(Error::EmptyField("expense type"));
        }

        Ok(Self {
            description,
            amount,
            expense_type,
        })
    }
}

/// A route handler for updating the description, amount and type of an expense entry.
pub async fn edit_expense_endpoint(
    State(state): State<ExpenseState>,
    Path(expense_id): Path<DatabaseId>,
    payload: Result<Json<EditExpenseForm>, JsonRejection>,
) -> Response {
    tracing::info!("Received request to update expense entry {expense_id}");

    let update = match payload
        .map_err(Error::from)
        .and_then(|Json(form)| ExpenseUpdate::try_from(form))
    {
        Ok(update) => update,
        Err(error) => {
            tracing::warn!("Rejected update for expense entry {expense_id}: {error}");
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

    match update_expense(expense_id, &update, &connection) {
        Ok(rows_affected) if rows_affected != 0 => {
            tracing::info!("Updated expense entry {expense_id}");
            Json(Message::new("Expense entry updated successfully")).into_response()
        }
        Ok(_) => {
            tracing::warn!("Expense entry {expense_id} not found");
            Error::UpdateMissingExpense.into_response()
        }
        Err(error) => {
            tracing::error!("Could not update expense entry {expense_id}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

/// Apply `update` to the expense entry `id`, returning zero if it did not exist.
pub fn update_expense(
    id: DatabaseId,
    update: &ExpenseUpdate,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    db::execute(
        connection,
        "UPDATE despesa \
        SET description = ?1, amount = ?2, expense_type = ?3 \
        WHERE id = ?4",
        params![update.description, update.amount, update.expense_type, id],
    )
    .map(|outcome| outcome.rows_affected)
}
