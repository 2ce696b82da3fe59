// Application state module
// Shared, read-only request state plus connection bookkeeping

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;

/// Application state
///
/// Request handling never mutates this; the only moving part is the
/// active connection counter used for limits and shutdown reporting.
pub struct AppState {
    pub config: Config,
    /// Asset root, resolved once at startup
    pub asset_root: PathBuf,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            asset_root: PathBuf::from(&config.assets.root),
            active_connections: AtomicUsize::new(0),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
