//! Movie payload validation.
//!
//! Pure functions only: no store access, no I/O. Id uniqueness is the
//! store's concern and is not checked here.

pub mod movie;
pub mod rules;

pub use movie::{validate_create, validate_partial};
pub use rules::{FieldViolation, Violation};
