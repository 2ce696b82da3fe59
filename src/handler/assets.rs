//! Front-end asset serving
//!
//! Named editor pages plus any other file under the asset root.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::PathBuf;
use tokio::fs;

/// Map a request path to the file it serves.
///
/// `..` segments are not rejected; they resolve however the OS resolves
/// them against the asset root.
pub fn resolve_asset_path(path: &str, state: &AppState) -> PathBuf {
    let assets = &state.config.assets;
    let root = &state.asset_root;

    match path {
        "/" | "/index.html" => root.join(&assets.index_file),
        "/basic" => root.join(&assets.basic_file),
        "/projects" | "/project-manager" => root.join(&assets.project_manager_file),
        other => root.join(other.trim_start_matches('/')),
    }
}

/// Serve the asset for `path` whole, or 404 if it cannot be read
pub async fn serve_asset(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    let file_path = resolve_asset_path(path, state);

    match fs::read(&file_path).await {
        Ok(data) => http::build_file_response(data, mime::content_type_for(&file_path)),
        Err(e) => {
            logger::log_debug(&format!(
                "Asset not served '{}': {e}",
                file_path.display()
            ));
            http::build_404_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state_with_root(root: &str) -> AppState {
        let mut cfg = Config::default();
        cfg.assets.root = root.to_string();
        AppState::new(&cfg)
    }

    #[test]
    fn test_named_pages() {
        let state = state_with_root("/srv/kb");
        let cases = [
            ("/", "/srv/kb/enhanced.html"),
            ("/index.html", "/srv/kb/enhanced.html"),
            ("/basic", "/srv/kb/web.html"),
            ("/projects", "/srv/kb/project-manager.html"),
            ("/project-manager", "/srv/kb/project-manager.html"),
        ];
        for (path, expected) in cases {
            assert_eq!(resolve_asset_path(path, &state), PathBuf::from(expected));
        }
    }

    #[test]
    fn test_other_paths_are_relative_to_root() {
        let state = state_with_root("/srv/kb");
        assert_eq!(
            resolve_asset_path("/css/app.css", &state),
            PathBuf::from("/srv/kb/css/app.css")
        );
        assert_eq!(
            resolve_asset_path("//logo.png", &state),
            PathBuf::from("/srv/kb/logo.png")
        );
        // Traversal is left to the OS
        assert_eq!(
            resolve_asset_path("/../secret.txt", &state),
            PathBuf::from("/srv/kb/../secret.txt")
        );
    }
}
