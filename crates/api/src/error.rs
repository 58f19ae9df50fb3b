use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be extracted (body, query string or path).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept the request method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "message": format!("{entity} with id {id} not found"),
                    "code": "NOT_FOUND",
                }),
            ),
            AppError::Core(CoreError::Validation(violations)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": violations,
                    "code": "VALIDATION_ERROR",
                }),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": msg,
                    "code": "BAD_REQUEST",
                }),
            ),
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({
                    "message": format!("no route for {path}"),
                    "code": "NOT_FOUND",
                }),
            ),
            AppError::MethodNotAllowed(target) => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({
                    "error": format!("method not allowed: {target}"),
                    "code": "METHOD_NOT_ALLOWED",
                }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
