//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: preflight, `/api/*` dispatch,
//! asset fallback, and the top-level guard that turns anything unexpected
//! into a plain 500.

use crate::api;
use crate::config::AppState;
use crate::handler::assets;
use crate::http::{self, body::BodyError};
use crate::logger::{self, AccessLogEntry};
use futures::FutureExt;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response};
use std::any::Any;
use std::convert::Infallible;
use std::fmt::Display;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Never fails: a panic while handling or logging becomes a plain 500.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    match AssertUnwindSafe(respond(req, &state, peer_addr)).catch_unwind().await {
        Ok(response) => Ok(response),
        Err(panic) => {
            logger::log_error(&format!(
                "{method} {path}: handler panicked: {}",
                panic_message(panic.as_ref())
            ));
            Ok(http::build_500_response())
        }
    }
}

async fn respond<B>(req: Request<B>, state: &AppState, peer_addr: SocketAddr) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Display,
{
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(ToOwned::to_owned);

    let mut response = match dispatch(req, state).await {
        Ok(resp) => resp,
        Err(BodyError::TooLarge { limit }) => {
            logger::log_warning(&format!("Request body too large for {path} (max: {limit})"));
            http::build_413_response()
        }
        Err(e) => {
            logger::log_error(&format!("{method} {path}: {e}"));
            http::build_500_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

/// Route by precedence: preflight, API, then assets
async fn dispatch<B>(req: Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, BodyError>
where
    B: Body,
    B::Error: Display,
{
    if req.method() == Method::OPTIONS {
        return Ok(http::build_options_response());
    }

    if req.uri().path().starts_with(api::API_PREFIX) {
        return api::handle_api_request(req, state).await;
    }

    Ok(assets::serve_asset(req.uri().path(), state).await)
}
