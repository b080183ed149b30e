use thiserror::Error;

use crate::domain::author::errors::AuthorIdError;
use crate::domain::validation::ValidationError;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid book ID: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error(transparent)]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid author ID")]
    InvalidAuthorId(#[from] AuthorIdError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Book not found")]
    NotFound(String),

    #[error("No books found for this author")]
    NoBooksForAuthor(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
