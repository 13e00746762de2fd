//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of characters of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => return unreadable_request_body(error),
    };
    log_body(
        &format!("Received request {} {}", parts.method, parts.uri),
        &body,
    );

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_body(&format!("Sending response {}", parts.status), &body);

    Response::from_parts(parts, Body::from(body))
}

fn unreadable_request_body(error: axum::Error) -> Response {
    tracing::error!("Could not read request body: {error}");
    Error::InvalidJson(error.to_string()).into_response()
}

fn log_body(summary: &str, body: &Bytes) {
    let text = String::from_utf8_lossy(body);

    match truncate(&text) {
        Some(truncated) => {
            tracing::info!("{summary}\nbody: {truncated}...");
            tracing::debug!("Full body: {text:?}");
        }
        None => tracing::info!("{summary}\nbody: {text:?}"),
    }
}

/// Returns the first [LOG_BODY_LENGTH_LIMIT] characters of `text`, or `None`
/// if `text` is short enough to log in full.
fn truncate(text: &str) -> Option<&str> {
    text.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| &text[..end])
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode};

    use crate::response::Message;

    use super::{LOG_BODY_LENGTH_LIMIT, truncate, unreadable_request_body};

    #[tokio::test]
    async fn unreadable_request_body_is_bad_request_with_message() {
        let response = unreadable_request_body(axum::Error::new("connection reset"));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message: Message = serde_json::from_slice(&body).unwrap();
        assert!(
            message.message.contains("connection reset"),
            "got message {:?}",
            message.message
        );
    }

    #[test]
    fn short_bodies_are_not_truncated() {
        assert_eq!(truncate(r#"{"id":1}"#), None);
        assert_eq!(truncate(&"a".repeat(LOG_BODY_LENGTH_LIMIT)), None);
    }

    #[test]
    fn long_bodies_are_truncated_to_limit() {
        let text = "a".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        assert_eq!(truncate(&text), Some(&text[..LOG_BODY_LENGTH_LIMIT]));
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let text = "ç".repeat(LOG_BODY_LENGTH_LIMIT + 1);

        let truncated = truncate(&text).unwrap();

        assert_eq!(truncated.chars().count(), LOG_BODY_LENGTH_LIMIT);
    }
}
