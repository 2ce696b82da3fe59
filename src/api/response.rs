// API response utility functions module

use crate::files::FileError;
use crate::http::{cors_builder, fallback_response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::ErrorResponse;

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Internal server error"}"#.to_string(),
            );
        }
    };

    build_json(status, json)
}

fn build_json(status: StatusCode, json: String) -> Response<Full<Bytes>> {
    cors_builder(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            fallback_response(status, "Error")
        })
}

/// `{error}` body with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response<Full<Bytes>> {
    json_response(
        status,
        &ErrorResponse {
            error: message.into(),
        },
    )
}

/// Map a gateway failure to 400 (caller fault) or 500 (filesystem fault)
pub fn file_error_response(err: &FileError) -> Response<Full<Bytes>> {
    if err.is_validation() {
        error_response(StatusCode::BAD_REQUEST, err.to_string())
    } else {
        logger::log_error(&err.to_string());
        error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

/// 404 for unknown `/api/*` routes
pub fn not_found() -> Response<Full<Bytes>> {
    error_response(StatusCode::NOT_FOUND, "API route not found")
}
