//! Access log format module
//!
//! Supported formats:
//! - `short` (`METHOD /path`, the default console line)
//! - `common` (Common Log Format - CLF)
//! - `json` (JSON structured logging)

use chrono::Local;
use serde_json::json;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            status: 200,
            body_bytes: 0,
            request_time_us: 0,
        }
    }

    /// Format the log entry; unknown formats fall back to `short`
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            _ => self.format_short(),
        }
    }

    fn format_short(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.request_uri(),
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/api/read-file".to_string(),
        );
        entry.query = Some("path=%2Ftmp%2Fnote.md".to_string());
        entry.status = 200;
        entry.body_bytes = 1234;
        entry.request_time_us = 1500;
        entry
    }

    #[test]
    fn test_format_short() {
        let entry = create_test_entry();
        assert_eq!(entry.format("short"), "GET /api/read-file");
        assert_eq!(entry.format("something-else"), "GET /api/read-file");
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format("common");
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /api/read-file?path=%2Ftmp%2Fnote.md\""));
        assert!(log.ends_with("200 1234"));
    }

    #[test]
    fn test_format_json() {
        let entry = create_test_entry();
        let log: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert_eq!(log["remote_addr"], "192.168.1.1");
        assert_eq!(log["method"], "GET");
        assert_eq!(log["status"], 200);
        assert_eq!(log["body_bytes"], 1234);
        assert_eq!(log["request_time_us"], 1500);
    }

    #[test]
    fn test_format_json_escapes_path() {
        let mut entry = create_test_entry();
        entry.path = "/weird\"path\n".to_string();
        entry.query = None;
        let log: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert_eq!(log["path"], "/weird\"path\n");
        assert!(log["query"].is_null());
    }
}
