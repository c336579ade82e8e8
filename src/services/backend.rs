//! Placeholder Backend Client
//!
//! The deployed site is expected to grow an API Gateway backend; for now
//! there is a single `/hello` endpoint returning `{ "message": string }`.
//! Nothing in the UI depends on it - it exists so the smoke tests have a
//! collaborator to assert against.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

/// Local mock backend used during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

pub fn hello_url(base: &str) -> String {
    format!("{}/hello", base.trim_end_matches('/'))
}

/// GET `<base>/hello` and parse the JSON body. Any network failure, non-2xx
/// status, or malformed payload comes back as `Err`.
pub async fn fetch_hello(base: &str) -> Result<HelloResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;

    let response = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(&hello_url(base)))
        .await
        .map_err(|e| format!("hello request failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("backend returned status {}", response.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(
        response
            .text()
            .map_err(|e| format!("failed to read body: {e:?}"))?,
    )
    .await
    .map_err(|e| format!("failed to read body: {e:?}"))?;
    let body = text
        .as_string()
        .ok_or_else(|| "non-text body".to_string())?;

    serde_json::from_str(&body).map_err(|e| format!("invalid hello payload: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_url_joining() {
        assert_eq!(hello_url("http://localhost:4000"), "http://localhost:4000/hello");
        assert_eq!(hello_url("http://localhost:4000/"), "http://localhost:4000/hello");
    }

    #[test]
    fn test_hello_response_shape() {
        let parsed: HelloResponse =
            serde_json::from_str(r#"{ "message": "Hello from Mock Backend!" }"#).unwrap();
        assert_eq!(parsed.message, "Hello from Mock Backend!");
    }

    #[test]
    fn test_hello_response_requires_message() {
        assert!(serde_json::from_str::<HelloResponse>(r#"{ "greeting": "hi" }"#).is_err());
        assert!(serde_json::from_str::<HelloResponse>("{}").is_err());
    }
}
