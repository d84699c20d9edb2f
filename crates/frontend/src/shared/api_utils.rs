//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Build a full API URL from a path relative to the configured API base.
///
/// # Arguments
/// * `path` - The API path, starting with "/" (e.g. "/projects")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/projects/123");   // "/api/projects/123"
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&config().api.base_path, path)
}

/// Percent-encodes a single path segment (project ids may contain "/" or spaces).
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "/projects"), "/api/projects");
        assert_eq!(join_url("/api/", "projects/1"), "/api/projects/1");
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("team a/b"), "team%20a%2Fb");
        assert_eq!(path_segment("p-42"), "p-42");
    }
}
