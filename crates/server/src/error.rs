use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("route not found")]
    RouteNotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("too many requests, slow down")]
    RateLimited,
    #[error("request handler panicked")]
    Panicked,
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` is required and cannot be empty")]
    MissingField { field: &'static str },
    #[error("`{field}` cannot be longer than {limit} chars")]
    TooLong { field: &'static str, limit: usize },
    #[error("a valid integer `id` is required")]
    MissingId,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

#[derive(Clone, Debug, Serialize)]
struct ErrorResponse<'a> {
    success: bool,
    error: &'a str,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Sqlx(e) => {
                error!("received internal error for user request: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
            Self::Panicked => {
                error!("request handler panicked");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            e @ Self::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
            e @ Self::RouteNotFound => (StatusCode::NOT_FOUND, e.to_string()),
            e @ Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, e.to_string()),
            e @ Self::RateLimited => (StatusCode::TOO_MANY_REQUESTS, e.to_string()),
        };
        let body = ErrorResponse {
            success: false,
            error: &error,
        };
        (status, Json(body)).into_response()
    }
}
