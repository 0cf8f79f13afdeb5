// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(#[from] FieldViolation),
    #[error("duplicate translation: {0}")]
    DuplicateTranslation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// A single violated field rule. Carries the field name so the HTTP layer
/// can report failures field-by-field instead of as an opaque message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldViolation {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("{0} must be a string")]
    NotText(&'static str),
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

impl FieldViolation {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field)
            | Self::NotNumeric(field)
            | Self::NotText(field)
            | Self::Empty(field)
            | Self::NotPositive(field) => field,
        }
    }
}
