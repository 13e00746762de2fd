//! Application router configuration for the income and expense ledgers.

use axum::{
    Router, middleware,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        list_expenses_endpoint,
    },
    income::{
        create_income_endpoint, delete_income_endpoint, edit_income_endpoint,
        list_income_endpoint,
    },
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Requests from any origin are allowed.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            endpoints::INCOME,
            get(list_income_endpoint).post(create_income_endpoint),
        )
        .route(
            endpoints::INCOME_ENTRY,
            put(edit_income_endpoint).delete(delete_income_endpoint),
        )
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE_ENTRY,
            put(edit_expense_endpoint).delete(delete_expense_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors)
        .with_state(state)
}
