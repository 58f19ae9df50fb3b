use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldViolation>),
}

impl CoreError {
    /// Shorthand for a missing movie.
    pub fn movie_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "movie",
            id: id.into(),
        }
    }
}
