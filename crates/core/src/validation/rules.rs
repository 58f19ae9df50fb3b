//! Violation types produced by the payload validator.

use std::fmt;

use serde::Serialize;

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Violation {
    /// A required field is absent.
    Required,
    /// The JSON value has the wrong type.
    InvalidType { expected: &'static str },
    /// A string (or list) that must have content is empty.
    Empty,
    /// A number with a fractional part where an integer is required.
    NotInteger,
    /// Zero or negative where a positive number is required.
    NotPositive,
    /// Outside the inclusive `[min, max]` range.
    OutOfRange { min: f64, max: f64 },
    /// Not a parseable absolute URL.
    InvalidUrl,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "is required"),
            Violation::InvalidType { expected } => write!(f, "must be of type {expected}"),
            Violation::Empty => write!(f, "must not be empty"),
            Violation::NotInteger => write!(f, "must be an integer"),
            Violation::NotPositive => write!(f, "must be a positive number"),
            Violation::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
            Violation::InvalidUrl => write!(f, "must be a valid URL"),
        }
    }
}

/// A single field-level violation.
///
/// Serializes flat, e.g.
/// `{"field":"year","code":"out_of_range","min":1900.0,"max":2030.0,"message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(flatten)]
    pub violation: Violation,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        let field = field.into();
        let message = format!("{field} {violation}");
        Self {
            field,
            violation,
            message,
        }
    }
}
