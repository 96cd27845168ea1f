//! Backend Bindings
//!
//! Frontend bindings to the REST backend, organized by domain.
//! Every call goes through `send`, which attaches credentials and turns the
//! HTTP response into either a decoded value or an `ApiError`.

mod auth;
mod comments;
mod files;
mod playlists;
mod posts;
mod users;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestCredentials, RequestInit, Response};

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::session;

// Re-export all public items
pub use auth::*;
pub use comments::*;
pub use files::*;
pub use playlists::*;
pub use posts::*;
pub use users::*;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a value for use as a single URL path segment or query value.
///
/// Folder paths contain `/`, which must not split the route.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

/// Response as received, before interpretation
#[derive(Debug, Clone, PartialEq)]
struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl RawResponse {
    fn ensure_success(self) -> ApiResult<Self> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &self.body))
        }
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(false, |ct| ct.contains("application/json"))
    }

    /// Decode a successful JSON body into `T`.
    fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        let raw = self.ensure_success()?;
        if !raw.is_json() {
            let text = raw.body.trim();
            return Err(ApiError::NonJson(if text.is_empty() {
                "Server returned non-JSON response".to_string()
            } else {
                text.to_string()
            }));
        }
        let value: Value = serde_json::from_str(&raw.body)?;
        if let Some(message) = rejection(&value) {
            return Err(ApiError::Rejected(message));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// The backend answers some failures with 2xx and `{"success": false}`.
fn rejection(value: &Value) -> Option<String> {
    if value.get("success") != Some(&Value::Bool(false)) {
        return None;
    }
    Some(
        value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request failed")
            .to_string(),
    )
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn browser_error(value: JsValue) -> ApiError {
    ApiError::Browser(js_message(&value))
}

async fn send(method: Method, endpoint: &str, body: Body) -> ApiResult<RawResponse> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("window unavailable".into()))?;
    let url = config::api_url(endpoint);

    let headers = Headers::new().map_err(browser_error)?;
    if let Some(token) = session::access_token() {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(browser_error)?;
    }

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_credentials(RequestCredentials::Include);
    match &body {
        Body::Empty => {}
        Body::Json(json) => {
            headers
                .set("Content-Type", "application/json")
                .map_err(browser_error)?;
            init.set_body(&JsValue::from_str(json));
        }
        // The browser sets the multipart boundary itself
        Body::Form(form) => init.set_body(form),
    }
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &init).map_err(browser_error)?;
    log::debug!("[Api] {} {}", method.as_str(), url);

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?
        .dyn_into()
        .map_err(|_| ApiError::Browser("fetch did not resolve to a Response".into()))?;

    let status = response.status();
    let content_type = response.headers().get("content-type").ok().flatten();
    let text = JsFuture::from(response.text().map_err(browser_error)?)
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?
        .as_string()
        .unwrap_or_default();

    if !(200..300).contains(&status) {
        log::warn!("[Api] {} {} -> {}", method.as_str(), url, status);
    }

    Ok(RawResponse {
        status,
        content_type,
        body: text,
    })
}

async fn get_json<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
    send(Method::Get, endpoint, Body::Empty).await?.decode()
}

async fn post_json<B, T>(endpoint: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let json = serde_json::to_string(body)?;
    send(Method::Post, endpoint, Body::Json(json)).await?.decode()
}

/// Multipart POST; the upload endpoint's reply carries nothing the UI needs
async fn post_form(endpoint: &str, form: FormData) -> ApiResult<()> {
    send(Method::Post, endpoint, Body::Form(form)).await?.ensure_success()?;
    Ok(())
}

/// POST without a body, ignoring whatever comes back on success
async fn post_empty(endpoint: &str) -> ApiResult<()> {
    send(Method::Post, endpoint, Body::Empty).await?.ensure_success()?;
    Ok(())
}

/// DELETE, ignoring the body of a successful response
async fn delete(endpoint: &str) -> ApiResult<()> {
    send(Method::Delete, endpoint, Body::Empty).await?.ensure_success()?;
    Ok(())
}

/// DELETE that returns the updated document
async fn delete_json<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
    send(Method::Delete, endpoint, Body::Empty).await?.decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileRecord;

    fn json(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decode_success() {
        let files: Vec<FileRecord> = json(200, r#"[{"uuid":"u1","title":"a.pdf"}]"#)
            .decode()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].uuid, "u1");
    }

    #[test]
    fn test_decode_maps_status() {
        let err = json(403, r#"{"success":false,"message":"You are not allowed"}"#)
            .decode::<Value>()
            .unwrap_err();
        assert_eq!(err, ApiError::Forbidden("You are not allowed".into()));

        let err = json(500, "").decode::<Value>().unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    fn test_decode_rejects_success_false() {
        let err = json(200, r#"{"success":false,"message":"Invalid password"}"#)
            .decode::<Value>()
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Invalid password".into()));
    }

    #[test]
    fn test_decode_non_json() {
        let raw = RawResponse {
            status: 200,
            content_type: Some("text/html".to_string()),
            body: "<html>proxy error</html>".to_string(),
        };
        assert_eq!(
            raw.decode::<Value>().unwrap_err(),
            ApiError::NonJson("<html>proxy error</html>".into())
        );

        let raw = RawResponse {
            status: 200,
            content_type: None,
            body: String::new(),
        };
        assert!(matches!(raw.decode::<Value>(), Err(ApiError::NonJson(_))));
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let err = json(200, r#"{"unexpected":true}"#)
            .decode::<Vec<FileRecord>>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_ensure_success_ignores_body() {
        let raw = RawResponse {
            status: 204,
            content_type: None,
            body: String::new(),
        };
        assert!(raw.ensure_success().is_ok());
        assert!(json(404, "").ensure_success().is_err());
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("Math/Algebra 1"), "Math%2FAlgebra%201");
        assert_eq!(encode_component("notes_(v2).pdf"), "notes_(v2).pdf");
        assert_eq!(encode_component("Çalışma"), "%C3%87al%C4%B1%C5%9Fma");
    }
}
