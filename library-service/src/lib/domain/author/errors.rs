use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Error for AuthorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorIdError {
    #[error("Invalid author ID: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error)]
pub enum AuthorError {
    #[error(transparent)]
    InvalidAuthorId(#[from] AuthorIdError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Author not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
