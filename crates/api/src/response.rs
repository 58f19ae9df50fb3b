//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgment body.
///
/// Returned by operations that have no resource to echo back (e.g. delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
