//! The API endpoints URIs.

/// The route for listing and creating income entries.
pub const INCOME: &str = "/api/entrada";
/// The route for updating or deleting a single income entry.
pub const INCOME_ENTRY: &str = "/api/entrada/{income_id}";
/// The route for listing and creating expense entries.
pub const EXPENSES: &str = "/api/despesa";
/// The route for updating or deleting a single expense entry.
pub const EXPENSE_ENTRY: &str = "/api/despesa/{expense_id}";

#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    #[track_caller]
    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::INCOME);
        assert_endpoint_is_valid_uri(endpoints::INCOME_ENTRY);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_ENTRY);
    }
}
