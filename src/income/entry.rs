use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, database_id::DatabaseId, db};

/// A sum of money received by someone, e.g., a salary payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// The ID generated by the database.
    pub id: DatabaseId,
    /// Who received the money.
    pub person: String,
    /// What the money was for.
    pub description: String,
    /// How much was received.
    pub amount: f64,
}

/// The state needed by the income endpoints.
#[derive(Debug, Clone)]
pub struct IncomeState {
    /// The database connection for managing income entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for IncomeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

pub fn create_income_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS entrada (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person TEXT NOT NULL,
            description TEXT NOT NULL,
            amount REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_income(row: &Row) -> Result<IncomeEntry, rusqlite::Error> {
    let id = row.get(0)?;
    let person = row.get(1)?;
    let description = row.get(2)?;
    let amount = row.get(3)?;

    Ok(IncomeEntry {
        id,
        person,
        description,
        amount,
    })
}

/// Get every income entry in the order SQLite returns them.
///
/// # Errors
/// Returns [Error::SqlError] if the table is missing or the query fails.
pub fn list_income(connection: &Connection) -> Result<Vec<IncomeEntry>, Error> {
    db::query(
        connection,
        "SELECT id, person, description, amount FROM entrada",
        [],
        map_row_to_income,
    )
}


#[cfg(test)]
mod list_income_tests {
    use rusqlite::{Connection, params};

    use crate::{db::initialize, income::IncomeEntry};

    use super::list_income;

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn);
        conn
    }

    #[test]
    fn returns_empty_list_for_empty_table() {
        let conn = get_test_connection();

        assert_eq!(list_income(&conn), Ok(vec![]));
    }

    #[test]
    fn returns_all_rows() {
        let conn = get_test_connection();
        conn.execute(
            "INSERT INTO entrada (person, description, amount) VALUES (?1, ?2, ?3)",
            params!["Ana", "Salary", 1000.0],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO entrada (person, description, amount) VALUES (?1, ?2, ?3)",
            params!["Bruno", "Freelance", 250.5],
        )
        .unwrap();

        let got = list_income(&conn).unwrap();

        assert_eq!(
            got,
            vec![
                IncomeEntry {
                    id: 1,
                    person: "Ana".to_owned(),
                    description: "Salary".to_owned(),
                    amount: 1000.0,
                },
                IncomeEntry {
                    id: 2,
                    person: "Bruno".to_owned(),
                    description: "Freelance".to_owned(),
                    amount: 250.5,
                },
            ]
        );
    }

    #[test]
    fn fails_when_table_is_missing() {
        let conn = get_test_connection();
        conn.execute("DROP TABLE entrada", ()).unwrap();

        assert!(matches!(list_income(&conn), Err(crate::Error::SqlError(_))));
    }
}
