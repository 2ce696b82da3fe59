use std::sync::Arc;
use tokio::sync::Notify;

mod api;
mod config;
mod files;
mod handler;
mod http;
mod logger;
mod server;

/// Config file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;

    logger::init(&cfg)?;
    logger::install_panic_hook();

    // Connection tasks run on a LocalSet on this thread and tokio::fs uses
    // the blocking pool, so workers only run the signal handler
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg));
    logger::log_server_start(&addr, &cfg, &state.asset_root);

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_server_loop(listener, state, shutdown))
        .await;

    Ok(())
}
