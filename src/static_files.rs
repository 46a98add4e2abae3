//! Static file serving rooted at the working directory.
//!
//! GET (and any method that is not POST or OPTIONS) falls through to
//! this module, mirroring what a stock file-serving handler would do:
//! 200 with the file contents, or 404.

use hyper::StatusCode;
use std::path::{Component, PathBuf};

use crate::Res;

/// Serve the file a request path points at, relative to the working
/// directory. Directories fall back to their `index.html`.
pub async fn serve(request_path: &str) -> Res {
    let Some(path) = resolve(request_path) else {
        return Res::builder().status(404).text("File not found");
    };

    let path = match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => path.join("index.html"),
        _ => path,
    };

    let res = Res::file(&path).await;
    if res.status_code() == StatusCode::NOT_FOUND {
        // Keep the plain-text 404 body's own content type.
        return res;
    }
    res.header("content-type", content_type_for(&path))
}

/// Map a URL path to a relative filesystem path.
///
/// Returns `None` for paths that try to escape the serving root.
/// The empty path and `/` map to `index.html`.
fn resolve(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(PathBuf::from("index.html"));
    }

    let path = PathBuf::from(trimmed);
    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }
    Some(path)
}

fn content_type_for(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_index() {
        assert_eq!(resolve("/"), Some(PathBuf::from("index.html")));
        assert_eq!(resolve(""), Some(PathBuf::from("index.html")));
    }

    #[test]
    fn plain_paths_resolve_relative() {
        assert_eq!(resolve("/style.css"), Some(PathBuf::from("style.css")));
        assert_eq!(
            resolve("/assets/logo.png"),
            Some(PathBuf::from("assets/logo.png"))
        );
    }

    #[test]
    fn traversal_is_rejected() {
        assert_eq!(resolve("/../secret"), None);
        assert_eq!(resolve("/a/../../b"), None);
    }

    #[test]
    fn content_types() {
        assert_eq!(
            content_type_for(std::path::Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(std::path::Path::new("data.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(std::path::Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
