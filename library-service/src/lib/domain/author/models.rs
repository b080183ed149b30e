use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::author::errors::AuthorIdError;
use crate::domain::validation::non_empty;
use crate::domain::validation::ValidationError;

/// Author entity. Books point at authors by id; authors know nothing of books.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Author unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an author ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AuthorIdError> {
        Uuid::parse_str(s)
            .map(AuthorId)
            .map_err(|e| AuthorIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Author display name, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    const FIELD: &'static str = "name";

    pub fn new(name: String) -> Result<Self, ValidationError> {
        non_empty(Self::FIELD, name).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct CreateAuthorCommand {
    pub name: AuthorName,
    pub bio: Option<String>,
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct UpdateAuthorCommand {
    pub name: Option<AuthorName>,
    pub bio: Option<String>,
}

impl Author {
    /// Apply a partial update in place.
    pub fn apply(&mut self, command: UpdateAuthorCommand) {
        if let Some(name) = command.name {
            self.name = name;
        }
        if let Some(bio) = command.bio {
            self.bio = Some(bio);
        }
    }
}
