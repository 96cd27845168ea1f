//! Session Persistence
//!
//! The signed-in user survives a reload through `localStorage`; the access
//! token lives in a cookie the backend sets.

use crate::config::{ACCESS_TOKEN_COOKIE, SESSION_STORAGE_KEY};
#[cfg(target_arch = "wasm32")]
use crate::error::ApiError;
use crate::error::ApiResult;
use crate::models::User;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> ApiResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| ApiError::Browser("localStorage unavailable".into()))
}

/// Restore the user saved by the last sign-in.
///
/// A stored value that no longer parses is treated as signed out.
pub fn load_user() -> Option<User> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage().ok()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("[Session] discarding stored session: {}", e);
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn save_user(user: &User) -> ApiResult<()> {
    let raw = serde_json::to_string(user)?;

    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?
            .set_item(SESSION_STORAGE_KEY, &raw)
            .map_err(|e| ApiError::Browser(format!("localStorage set_item failed: {e:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = raw;
        Ok(())
    }
}

pub fn clear_user() -> ApiResult<()> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?
            .remove_item(SESSION_STORAGE_KEY)
            .map_err(|e| ApiError::Browser(format!("localStorage remove_item failed: {e:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(())
    }
}

/// Access token from `document.cookie`, when the cookie is not HttpOnly
pub fn access_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        cookie_value(&cookies, ACCESS_TOKEN_COOKIE)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ACCESS_TOKEN_COOKIE;
        None
    }
}

/// Value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "theme=dark; access_token=eyJhbGciOi.payload.sig; lang=en";
        assert_eq!(
            cookie_value(cookies, "access_token"),
            Some("eyJhbGciOi.payload.sig".to_string())
        );
        assert_eq!(cookie_value(cookies, "lang"), Some("en".to_string()));
    }

    #[test]
    fn test_cookie_value_missing_or_empty() {
        assert_eq!(cookie_value("", "access_token"), None);
        assert_eq!(cookie_value("access_token=", "access_token"), None);
        assert_eq!(cookie_value("my_access_token=x", "access_token"), None);
    }

    #[test]
    fn test_native_session_is_empty() {
        assert_eq!(load_user(), None);
        assert_eq!(access_token(), None);
        assert!(clear_user().is_ok());
    }
}
