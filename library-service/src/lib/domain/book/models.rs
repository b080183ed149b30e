use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookIdError;
use crate::domain::validation::non_empty;
use crate::domain::validation::ValidationError;

/// Book entity.
///
/// `author_id` is a plain reference: it is not checked against the author
/// table and survives the author's deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author_id: AuthorId,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// A book joined with the name of its author, when that author still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetails {
    pub book: Book,
    pub author_name: Option<String>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    const FIELD: &'static str = "title";

    pub fn new(title: String) -> Result<Self, ValidationError> {
        non_empty(Self::FIELD, title).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse the `author` field of a book payload.
///
/// Only the format is checked; the author may not exist.
pub fn author_reference(value: &str) -> Result<AuthorId, ValidationError> {
    AuthorId::from_string(value).map_err(|_| ValidationError::InvalidId("author"))
}

#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub author_id: AuthorId,
    pub published_year: Option<i32>,
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct UpdateBookCommand {
    pub title: Option<BookTitle>,
    pub author_id: Option<AuthorId>,
    pub published_year: Option<i32>,
}

impl Book {
    /// Apply a partial update in place.
    pub fn apply(&mut self, command: UpdateBookCommand) {
        if let Some(title) = command.title {
            self.title = title;
        }
        if let Some(author_id) = command.author_id {
            self.author_id = author_id;
        }
        if let Some(year) = command.published_year {
            self.published_year = Some(year);
        }
    }
}
