//! Defines the endpoint for deleting an income entry.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{Error, database_id::DatabaseId, db, income::IncomeState, response::Message};

/// A route handler for deleting an income entry, responds with a message.
pub async fn delete_income_endpoint(
    State(state): State<IncomeState>,
    Path(income_id): Path<DatabaseId>,
) -> Response {
    tracing::info!("Received request to delete income entry {income_id}");

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_income(income_id, &connection) {
        Ok(rows_affected) if rows_affected != 0 => {
            tracing::info!("Deleted income entry {income_id}");
            Json(Message::new("Income entry deleted successfully")).into_response()
        }
        Ok(_) => {
            tracing::warn!("Income entry {income_id} not found for deletion");
            Error::DeleteMissingIncome.into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete income entry {income_id}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

/// Remove the income entry `id`, returning zero if it did not exist.
pub fn delete_income(id: DatabaseId, connection: &Connection) -> Result<RowsAffected, Error> {
    db::execute(
        connection,
        "DELETE FROM entrada WHERE id = :id",
        &[(":id", &id)],
    )
    .map(|outcome| outcome.rows_affected)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::to_bytes,
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        income::{
            IncomeForm, IncomeState, create_income, delete_income, delete_income_endpoint,
            list_income,
        },
        response::ErrorMessage,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection);
        connection
    }

    fn insert_salary(connection: &Connection) -> i64 {
        create_income(
            &IncomeForm {
                person: Some("Ana".to_owned()),
                description: Some("Salary".to_owned()),
                amount: Some(1000.0),
            },
            connection,
        )
        .unwrap()
    }

    #[test]
    fn deletes_income() {
        let connection = get_test_connection();
        let id = insert_salary(&connection);

        let rows_affected = delete_income(id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(list_income(&connection), Ok(vec![]));
    }

    #[tokio::test]
    async fn missing_id_is_not_found_and_keeps_rows() {
        let connection = get_test_connection();
        let id = insert_salary(&connection);
        let state = IncomeState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = delete_income_endpoint(State(state.clone()), Path(id + 1)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let remaining = list_income(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let connection = get_test_connection();
        let id = insert_salary(&connection);
        let state = IncomeState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let first = delete_income_endpoint(State(state.clone()), Path(id)).await;
        let second = delete_income_endpoint(State(state), Path(id)).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn responds_with_sql_error_message() {
        let connection = get_test_connection();
        let id = insert_salary(&connection);
        connection.execute("DROP TABLE entrada", ()).unwrap();
        let state = IncomeState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = delete_income_endpoint(State(state), Path(id)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorMessage = serde_json::from_slice(&body).unwrap();
        assert!(
            error.error.contains("no such table"),
            "got error message {:?}",
            error.error
        );
    }
}
