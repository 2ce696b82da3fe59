// API module entry
// File gateway endpoints under /api/

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::fmt::Display;

use crate::config::AppState;
use crate::http::body::{read_body, BodyError};
use crate::logger;

/// Path prefix owned by this module
pub const API_PREFIX: &str = "/api/";

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
/// Only a body that cannot be read (or is over the configured cap) comes
/// back as an error; every gateway outcome is already a response.
pub async fn handle_api_request<B>(
    req: Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, BodyError>
where
    B: Body,
    B::Error: Display,
{
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(ToOwned::to_owned);
    let method = req.method().clone();
    let limit = state.config.http.max_body_size;

    match (method, path.as_str()) {
        (Method::GET, "/api/read-directory") => {
            Ok(handlers::handle_read_directory(query.as_deref()).await)
        }
        (Method::GET, "/api/read-file") => Ok(handlers::handle_read_file(query.as_deref()).await),
        (Method::POST, "/api/write-file") => {
            let body = read_body(req, limit).await?;
            Ok(handlers::handle_write_file(&body).await)
        }
        (Method::POST, "/api/append-file") => {
            let body = read_body(req, limit).await?;
            Ok(handlers::handle_append_file(&body).await)
        }
        (method, _) => {
            logger::log_debug(&format!("No API route for {method} {path}"));
            Ok(response::not_found())
        }
    }
}
