use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::AuthorName;
use crate::domain::author::ports::AuthorRepository;

pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
    bio: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = AuthorError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId(row.id),
            name: AuthorName::new(row.name)?,
            bio: row.bio,
            created_at: row.created_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> AuthorError {
    AuthorError::DatabaseError(e.to_string())
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn create(&self, author: Author) -> Result<Author, AuthorError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, name, bio, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(author.id.0)
        .bind(author.name.as_str())
        .bind(author.bio.as_deref())
        .bind(author.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(author)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, bio, created_at
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Author::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Author>, AuthorError> {
        sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, bio, created_at
            FROM authors
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Author::try_from)
        .collect()
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET name = $2, bio = $3
            WHERE id = $1
            "#,
        )
        .bind(author.id.0)
        .bind(author.name.as_str())
        .bind(author.bio.as_deref())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthorError::NotFound(author.id.to_string()));
        }

        Ok(author)
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError> {
        let result = sqlx::query(
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthorError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
