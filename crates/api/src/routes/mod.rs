use axum::http::{Method, Uri};

use crate::error::AppError;

pub mod health;
pub mod movies;

/// Fallback for paths no route matches.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound(format!("{method} {}", uri.path()))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
