use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookDetails;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Book row joined with its author's name (NULL when the author is gone).
#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author_id: Uuid,
    published_year: Option<i32>,
    created_at: DateTime<Utc>,
    author_name: Option<String>,
}

impl TryFrom<BookRow> for BookDetails {
    type Error = BookError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(BookDetails {
            book: Book {
                id: BookId(row.id),
                title: BookTitle::new(row.title)?,
                author_id: AuthorId(row.author_id),
                published_year: row.published_year,
                created_at: row.created_at,
            },
            author_name: row.author_name,
        })
    }
}

fn database_error(e: sqlx::Error) -> BookError {
    BookError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<BookDetails, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            WITH inserted AS (
                INSERT INTO books (id, title, author_id, published_year, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, title, author_id, published_year, created_at
            )
            SELECT i.id, i.title, i.author_id, i.published_year, i.created_at,
                   a.name AS author_name
            FROM inserted i
            LEFT JOIN authors a ON a.id = i.author_id
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author_id.0)
        .bind(book.published_year)
        .bind(book.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        BookDetails::try_from(row)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<BookDetails>, BookError> {
        sqlx::query_as::<_, BookRow>(
            r#"
            SELECT b.id, b.title, b.author_id, b.published_year, b.created_at,
                   a.name AS author_name
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            WHERE b.id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(BookDetails::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<BookDetails>, BookError> {
        sqlx::query_as::<_, BookRow>(
            r#"
            SELECT b.id, b.title, b.author_id, b.published_year, b.created_at,
                   a.name AS author_name
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            ORDER BY b.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(BookDetails::try_from)
        .collect()
    }

    async fn find_by_author(&self, author_id: &AuthorId) -> Result<Vec<BookDetails>, BookError> {
        sqlx::query_as::<_, BookRow>(
            r#"
            SELECT b.id, b.title, b.author_id, b.published_year, b.created_at,
                   a.name AS author_name
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            WHERE b.author_id = $1
            ORDER BY b.created_at ASC
            "#,
        )
        .bind(author_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(BookDetails::try_from)
        .collect()
    }

    async fn update(&self, book: Book) -> Result<BookDetails, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            WITH updated AS (
                UPDATE books
                SET title = $2, author_id = $3, published_year = $4
                WHERE id = $1
                RETURNING id, title, author_id, published_year, created_at
            )
            SELECT u.id, u.title, u.author_id, u.published_year, u.created_at,
                   a.name AS author_name
            FROM updated u
            LEFT JOIN authors a ON a.id = u.author_id
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author_id.0)
        .bind(book.published_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(BookError::NotFound(book.id.to_string()))?;

        BookDetails::try_from(row)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
