//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base URL baked in at build time (`API_URL=https://... trunk build`)
const BUILD_API_URL: Option<&str> = option_env!("API_URL");

/// Get the base URL for API requests
///
/// Uses the build-time `API_URL` when set. Otherwise constructs the URL
/// from the current window location, using port 3000 for the backend.
///
/// # Returns
/// - API base URL like "http://localhost:3000", never with a trailing slash
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = BUILD_API_URL.filter(|u| !u.trim().is_empty()) {
        return url.trim().trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/room-category");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// URL конкретной записи: `{base}{resource}/{id}`, id экранируется
pub fn record_url(resource: &str, id: &str) -> String {
    format!("{}/{}", api_url(resource), urlencoding::encode(id))
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
        assert_eq!(
            join_url("http://localhost:3000", "/room-category"),
            "http://localhost:3000/room-category"
        );
        assert_eq!(
            join_url("https://api.hotel.in/", "booking-room"),
            "https://api.hotel.in/booking-room"
        );
    }
}
