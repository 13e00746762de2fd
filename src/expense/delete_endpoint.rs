//! Defines the endpoint for deleting an expense entry.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{Error, database_id::DatabaseId, db, expense::ExpenseState, response::Message};

/// A route handler for deleting an expense entry, responds with a message.
pub async fn delete_expense_endpoint(
    State(state): State<ExpenseState>,
    Path(expense_id): Path<DatabaseId>,
) -> Response {
    tracing::info!("Received request to delete expense entry {expense_id}");

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_expense(expense_id, &connection) {
        Ok(rows_affected) if rows_affected != 0 => {
            tracing::info!("Deleted expense entry {expense_id}");
            Json(Message::new("Expense entry deleted successfully")).into_response()
        }
        Ok(_) => {
            tracing::warn!("Expense entry {expense_id} not found for deletion");
            Error::DeleteMissingExpense.into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete expense entry {expense_id}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

/// Remove the expense entry `id`, returning zero if it did not exist.
pub fn delete_expense(id: DatabaseId, connection: &Connection) -> Result<RowsAffected, Error> {
    db::execute(
        connection,
        "DELETE FROM despesa WHERE id = :id",
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
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{
            ExpenseForm, ExpenseState, create_expense, delete_expense, delete_expense_endpoint,
            list_expenses,
        },
        response::{ErrorMessage, Message},
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection);
        connection
    }

    fn insert_rent(connection: &Connection) -> i64 {
        create_expense(
            &ExpenseForm {
                person: Some("Ana".to_owned()),
                description: Some("Rent".to_owned()),
                amount: Some(900.0),
                expense_type: None,
                due_date: Some(date!(2025 - 01 - 05)),
            },
            connection,
        )
        .unwrap()
    }

    #[test]
    fn deletes_expense() {
        let connection = get_test_connection();
        let id = insert_rent(&connection);

        assert_eq!(delete_expense(id, &connection), Ok(1));
        assert_eq!(list_expenses(&connection), Ok(vec![]));
    }

    #[test]
    fn missing_id_deletes_nothing() {
        let connection = get_test_connection();
        let id = insert_rent(&connection);

        assert_eq!(delete_expense(id + 1, &connection), Ok(0));
        assert_eq!(list_expenses(&connection).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_id_is_not_found_and_keeps_rows() {
        let connection = get_test_connection();
        let id = insert_rent(&connection);
        let state = ExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = delete_expense_endpoint(State(state.clone()), Path(id + 1)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message: Message = serde_json::from_slice(&body).unwrap();
        assert_eq!(message.message, "Expense entry not found");
        let remaining = list_expenses(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn responds_with_sql_error_message() {
        let connection = get_test_connection();
        let id = insert_rent(&connection);
        connection.execute("DROP TABLE despesa", ()).unwrap();
        let state = ExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = delete_expense_endpoint(State(state), Path(id)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorMessage = serde_json::from_slice(&body).unwrap();
        assert!(
            error.error.contains("no such table"),
            "got error message {:?}",
            error.error
        );
    }

    #[tokio::test]
    async fn poisoned_lock_is_internal_server_error() {
        let connection = get_test_connection();
        let id = insert_rent(&connection);
        let state = ExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        };
        let shared = state.db_connection.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("panicked while holding the database lock");
        })
        .join();

        let response = delete_expense_endpoint(State(state), Path(id)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorMessage = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, Error::DatabaseLockError.to_string());
    }
}
