// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub assets: AssetsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (short, common, json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: true,
            access_log_format: "short".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    pub max_connections: Option<u64>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            max_connections: None,
        }
    }
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub server_name: String,
    /// Request body cap in bytes; unlimited when unset
    pub max_body_size: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            server_name: "kb_server".to_string(),
            max_body_size: None,
        }
    }
}

/// Front-end asset locations
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory static paths are resolved against
    pub root: String,
    /// Served for `/` and `/index.html`
    pub index_file: String,
    /// Served for `/basic`
    pub basic_file: String,
    /// Served for `/projects` and `/project-manager`
    pub project_manager_file: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            index_file: "enhanced.html".to_string(),
            basic_file: "web.html".to_string(),
            project_manager_file: "project-manager.html".to_string(),
        }
    }
}
