use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::response::Message;

/// The fallback handler for routes that do not exist.
pub async fn get_404_not_found(uri: Uri) -> Response {
    tracing::warn!("No route for {uri}");

    (
        StatusCode::NOT_FOUND,
        Json(Message::new(format!("No route for {}", uri.path()))),
    )
        .into_response()
}
