//! JSON request bodies.
//!
//! A body with no `content-type` is still parsed as JSON; a declared
//! non-JSON content type is rejected with 422 like any other bad body.

use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

pub fn parse_json_body<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> Result<T, ApiError> {
    if let Some(value) = headers.get(header::CONTENT_TYPE) {
        let content_type = value.to_str().unwrap_or_default();
        if !is_json_content_type(content_type) {
            return Err(ApiError::invalid_body(
                "content_type",
                format!("expected a JSON body, got content-type '{content_type}'"),
            ));
        }
    }
    Ok(serde_json::from_slice(body)?)
}
