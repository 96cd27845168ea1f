//! Build-time Configuration
//!
//! Everything here is fixed when the WASM bundle is built.

use log::LevelFilter;

/// Backend origin prepended to every `/api/...` endpoint.
///
/// Set `NEXAHUB_API_URL` at build time; empty means same origin.
pub const API_URL: &str = match option_env!("NEXAHUB_API_URL") {
    Some(url) => url,
    None => "",
};

/// localStorage key for the signed-in user
pub const SESSION_STORAGE_KEY: &str = "nexahub.session.v1";

/// Cookie the backend sets with the session token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Grace period before an auth guard redirects, so a restored session can land first
pub const AUTH_REDIRECT_DELAY_MS: u32 = 100;

/// How long success messages stay on screen
pub const FLASH_MESSAGE_MS: u32 = 3000;

/// Posts returned per `getposts` page
pub const POSTS_PAGE_SIZE: usize = 9;

/// Users returned per `getusers` page on the dashboard
pub const USERS_PAGE_SIZE: usize = 9;

/// Rows in each "recent" table of the dashboard
pub const DASHBOARD_RECENT: usize = 5;

/// Log records kept in memory by the rolling logger
pub const LOG_CAPACITY: usize = 500;

pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// Absolute URL for a backend endpoint
pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", API_URL.trim_end_matches('/'), endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_keeps_endpoint() {
        assert!(api_url("/api/file").ends_with("/api/file"));
        assert!(!api_url("/api/file").contains("//api"));
    }
}
