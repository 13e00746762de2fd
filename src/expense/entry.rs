use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{AppState, Error, database_id::DatabaseId, db};

/// The expense type stored when a new expense does not specify one.
pub const DEFAULT_EXPENSE_TYPE: &str = "variable";

/// A bill or purchase that someone has to pay by a due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    /// The ID generated by the database.
    pub id: DatabaseId,
    /// Who the expense belongs to.
    pub person: String,
    /// What the expense is for.
    pub description: String,
    /// How much has to be paid.
    pub amount: f64,
    /// A free-form category, e.g. "fixed" or "variable".
    pub expense_type: String,
    /// When the expense has to be paid.
    pub due_date: Date,
}

/// The state needed by the expense endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState {
    /// The database connection for managing expense entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS despesa (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person TEXT NOT NULL,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            expense_type TEXT NOT NULL DEFAULT 'variable',
            due_date TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_expense(row: &Row) -> Result<ExpenseEntry, rusqlite::Error> {
    let id = row.get(0)?;
    let person = row.get(1)?;
    let description = row.get(2)?;
    let amount = row.get(3)?;
    let expense_type = row.get(4)?;
    let due_date = row.get(5)?;

    Ok(ExpenseEntry {
        id,
        person,
        description,
        amount,
        expense_type,
        due_date,
    })
}

/// Get every expense entry in the order SQLite returns them.
///
/// # Errors
/// Returns [Error::SqlError] if the table is missing, the query fails, or a
/// stored due date is not a valid `YYYY-MM-DD` date.
pub fn list_expenses(connection: &Connection) -> Result<Vec<ExpenseEntry>, Error> {
    db::query(
        connection,
        "SELECT id, person, description, amount, expense_type, due_date FROM despesa",
        [],
        map_row_to_expense,
    )
}
