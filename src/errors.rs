use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every way a request can fail. Converting into a response is also where
/// the failure gets logged, so handlers only need to return the error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("{method} {url}")]
    MethodNotAllowed { method: String, url: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{err:#}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = status.as_u16();

        let body = match &self {
            ApiError::BadRequest(message) => {
                tracing::warn!("{code} Error: {message}");
                json!({ "error": message })
            }
            ApiError::NotFound(url) => {
                tracing::warn!("{code} Error: {url}");
                json!({ "error": "Resource not found", "status_code": code })
            }
            ApiError::PayloadTooLarge { .. } => {
                tracing::warn!("{code} Error: {self}");
                json!({ "error": "Request body too large", "status_code": code })
            }
            ApiError::MethodNotAllowed { .. } => {
                tracing::warn!("{code} Error: {self}");
                json!({ "error": "Method not allowed", "status_code": code })
            }
            // detail stays in the log, the caller only sees the generic message
            ApiError::Internal(detail) => {
                tracing::error!("{code} Error: {detail}");
                json!({ "error": "Internal server error", "status_code": code })
            }
        };

        (status, Json(body)).into_response()
    }
}
