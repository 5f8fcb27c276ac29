use thiserror::Error;

use super::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Invalid username or password.")]
    Unauthorized,
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(e: ValidationErrors) -> Self {
        DomainError::Validation(e)
    }
}

impl<T> From<std::sync::PoisonError<T>> for DomainError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        DomainError::Internal(e.to_string())
    }
}
