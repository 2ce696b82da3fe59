//! HTTP response building module
//!
//! Every builder here starts from [`cors_builder`], so all responses carry
//! the same cross-origin headers whatever their status.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Response builder preloaded with CORS headers
pub fn cors_builder(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
}

/// Response used when a builder rejects its input.
///
/// Built without the builder, so it cannot fail; keeps the status, the
/// CORS headers and a plain-text content type.
pub fn fallback_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(body.into()));
    *resp.status_mut() = status;
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert("Access-Control-Allow-Methods", HeaderValue::from_static(ALLOW_METHODS));
    headers.insert("Access-Control-Allow-Headers", HeaderValue::from_static(ALLOW_HEADERS));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    resp
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    cors_builder(StatusCode::OK)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            fallback_response(StatusCode::OK, Bytes::new())
        })
}

/// Build 200 response carrying a whole file
pub fn build_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    cors_builder(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            fallback_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        })
}

/// Build 404 response for a missing static file
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "File not found")
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
}

/// Build 500 response used by the top-level guard
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

fn build_text_response(status: StatusCode, text: &'static str) -> Response<Full<Bytes>> {
    cors_builder(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(text)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            fallback_response(status, text)
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
