use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::error::Category;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Request body failed to parse or deserialize; always reported as 422.
    #[error("{msg}")]
    InvalidBody { kind: &'static str, msg: String },
}

impl ApiError {
    pub fn invalid_body(kind: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidBody { kind, msg: msg.into() }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        let kind = match e.classify() {
            Category::Syntax | Category::Eof => "json_invalid",
            Category::Data => "value_error",
            Category::Io => "body_read",
        };
        Self::invalid_body(kind, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(e @ ServiceError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"message": e.to_string()}))).into_response()
            }
            ApiError::InvalidBody { kind, msg } => {
                debug!(%kind, %msg, "rejected request body");
                let detail = serde_json::json!([{"loc": ["body"], "msg": msg, "type": kind}]);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!({"detail": detail}))).into_response()
            }
        }
    }
}
