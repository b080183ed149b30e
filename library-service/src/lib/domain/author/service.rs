use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::author::ports::AuthorRepository;
use crate::domain::author::ports::AuthorServicePort;

pub struct AuthorService<AR>
where
    AR: AuthorRepository,
{
    repository: Arc<AR>,
}

impl<AR> AuthorService<AR>
where
    AR: AuthorRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AuthorServicePort for AuthorService<AR>
where
    AR: AuthorRepository,
{
    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError> {
        let author = Author {
            id: AuthorId::new(),
            name: command.name,
            bio: command.bio,
            created_at: Utc::now(),
        };

        self.repository.create(author).await
    }

    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound(id.to_string()))
    }

    async fn list_authors(&self) -> Result<Vec<Author>, AuthorError> {
        self.repository.list_all().await
    }

    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError> {
        let mut author = self.get_author(id).await?;
        author.apply(command);

        self.repository.update(author).await
    }

    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError> {
        self.repository.delete(id).await
    }
}
