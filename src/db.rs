//! The persistence gateway shared by both ledgers.
//!
//! The server opens a single [Connection] at startup and hands it to the
//! ledgers wrapped in `Arc<Mutex<_>>` (see [crate::AppState]). Holding the lock
//! for the duration of one statement serializes writers in-process, and WAL
//! mode lets readers in other processes continue while a write is in flight.

use std::path::Path;

use rusqlite::{Connection, Params, Row};

use crate::{
    Error, database_id::DatabaseId, expense::create_expense_table, income::create_income_table,
};

/// The result of running a single write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// The row ID of the most recent successful insert on the connection.
    ///
    /// Only meaningful after an `INSERT`.
    pub last_insert_id: DatabaseId,
    /// The number of rows changed by the statement.
    pub rows_affected: usize,
}

/// Open the SQLite database at `path`, creating the file if needed.
///
/// The tables are created by [initialize], which [crate::AppState::new] runs.
///
/// # Errors
/// Returns an error if the database file cannot be opened or created.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection, Error> {
    let path = path.as_ref();
    let connection = Connection::open(path).map_err(|error| {
        tracing::error!("Could not open the database {}: {error}", path.display());
        Error::from(error)
    })?;
    tracing::info!("Connected to the SQLite database {}", path.display());

    Ok(connection)
}

/// Enable write-ahead logging and create the ledger tables if they do not
/// exist yet.
///
/// This function is idempotent. Errors are logged rather than returned so that
/// the server still starts; requests that touch a missing table will fail with
/// an internal server error instead.
pub fn initialize(connection: &Connection) {
    // The pragma returns the journal mode in effect, in-memory databases stay on "memory".
    match connection.query_row("PRAGMA journal_mode = WAL", [], |row| {
        row.get::<_, String>(0)
    }) {
        Ok(mode) => tracing::debug!("Journal mode set to {mode}"),
        Err(error) => tracing::error!("Could not enable WAL journal mode: {error}"),
    }

    match create_income_table(connection) {
        Ok(()) => tracing::info!("Table \"entrada\" checked or created."),
        Err(error) => tracing::error!("Could not create table \"entrada\": {error}"),
    }

    match create_expense_table(connection) {
        Ok(()) => tracing::info!("Table \"despesa\" checked or created."),
        Err(error) => tracing::error!("Could not create table \"despesa\": {error}"),
    }
}

/// Run a single parameterized write statement.
///
/// The caller must hold the connection lock across this call so that
/// [ExecuteOutcome::last_insert_id] belongs to this statement.
pub fn execute<P: Params>(
    connection: &Connection,
    statement: &str,
    params: P,
) -> Result<ExecuteOutcome, Error> {
    let rows_affected = connection.execute(statement, params)?;

    Ok(ExecuteOutcome {
        last_insert_id: connection.last_insert_rowid(),
        rows_affected,
    })
}

/// Run a single parameterized read statement and collect every row.
pub fn query<T, P, F>(
    connection: &Connection,
    statement: &str,
    params: P,
    map_row: F,
) -> Result<Vec<T>, Error>
where
    P: Params,
    F: FnMut(&Row) -> Result<T, rusqlite::Error>,
{
    connection
        .prepare(statement)?
        .query_map(params, map_row)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}
