use async_trait::async_trait;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookDetails;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;

/// Port for book operations, including the author-scoped lookup.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a book. The referenced author is not required to exist.
    async fn create_book(&self, command: CreateBookCommand) -> Result<BookDetails, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn get_book(&self, id: &BookId) -> Result<BookDetails, BookError>;

    /// List every book. Empty when none exist.
    async fn list_books(&self) -> Result<Vec<BookDetails>, BookError>;

    /// List the books whose author reference equals `author_id`.
    ///
    /// # Errors
    /// * `NoBooksForAuthor` - Nothing matches (never an empty success)
    /// * `DatabaseError` - Database operation failed
    async fn list_books_by_author(
        &self,
        author_id: &AuthorId,
    ) -> Result<Vec<BookDetails>, BookError>;

    /// Overwrite the supplied fields of an existing book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<BookDetails, BookError>;

    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for books.
///
/// Reads join the author's name; a dangling reference yields `author_name: None`.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn create(&self, book: Book) -> Result<BookDetails, BookError>;

    async fn find_by_id(&self, id: &BookId) -> Result<Option<BookDetails>, BookError>;

    /// All books, oldest first.
    async fn list_all(&self) -> Result<Vec<BookDetails>, BookError>;

    async fn find_by_author(&self, author_id: &AuthorId) -> Result<Vec<BookDetails>, BookError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn update(&self, book: Book) -> Result<BookDetails, BookError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
