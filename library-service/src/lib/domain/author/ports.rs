use async_trait::async_trait;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::models::UpdateAuthorCommand;

/// Port for author operations.
#[async_trait]
pub trait AuthorServicePort: Send + Sync + 'static {
    /// Create a new author.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError>;

    /// Retrieve author by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// List every author. Empty when none exist.
    async fn list_authors(&self) -> Result<Vec<Author>, AuthorError>;

    /// Overwrite the supplied fields of an existing author.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError>;

    /// Delete an author. Books referencing it are left as they are.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError>;
}

/// Persistence operations for authors.
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    async fn create(&self, author: Author) -> Result<Author, AuthorError>;

    /// # Returns
    /// Optional author entity (None if not found)
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;

    /// All authors, oldest first.
    async fn list_all(&self) -> Result<Vec<Author>, AuthorError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn update(&self, author: Author) -> Result<Author, AuthorError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError>;
}
