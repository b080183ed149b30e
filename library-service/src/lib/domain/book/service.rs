use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookDetails;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;

pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(&self, command: CreateBookCommand) -> Result<BookDetails, BookError> {
        let book = Book {
            id: BookId::new(),
            title: command.title,
            author_id: command.author_id,
            published_year: command.published_year,
            created_at: Utc::now(),
        };

        let created = self.repository.create(book).await?;
        if created.author_name.is_none() {
            tracing::warn!(
                book_id = %created.book.id,
                author_id = %created.book.author_id,
                "Book created with a reference to an unknown author"
            );
        }

        Ok(created)
    }

    async fn get_book(&self, id: &BookId) -> Result<BookDetails, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn list_books(&self) -> Result<Vec<BookDetails>, BookError> {
        self.repository.list_all().await
    }

    async fn list_books_by_author(
        &self,
        author_id: &AuthorId,
    ) -> Result<Vec<BookDetails>, BookError> {
        let books = self.repository.find_by_author(author_id).await?;

        if books.is_empty() {
            return Err(BookError::NoBooksForAuthor(author_id.to_string()));
        }

        Ok(books)
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<BookDetails, BookError> {
        let mut book = self.get_book(id).await?.book;
        book.apply(command);

        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.repository.delete(id).await
    }
}
