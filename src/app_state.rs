//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::db::initialize;

/// The state of the REST server.
///
/// The connection is the only shared state. Each ledger endpoint extracts its
/// own state from this struct via `FromRef`, so handlers never reach for a
/// global connection.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the ledger tables
    /// if they do not already exist.
    pub fn new(db_connection: Connection) -> Self {
        initialize(&db_connection);

        Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        }
    }
}
