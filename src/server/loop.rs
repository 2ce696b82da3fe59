// Server loop module
// Accepts connections until shutdown, then drains in-flight requests

use hyper_util::server::graceful::GracefulShutdown;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until `shutdown` fires.
///
/// After the signal the listener is closed so no new connections are
/// taken, idle keep-alive connections are told to close, and the call
/// returns once every in-flight request has completed.
pub async fn run_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &graceful);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_info(&format!(
        "Listener closed, waiting for {} connection(s) to finish...",
        state.connection_count()
    ));

    graceful.shutdown().await;
    // Let finished connection tasks release their counter slot
    tokio::task::yield_now().await;

    logger::log_shutdown_complete(state.connection_count());
}
