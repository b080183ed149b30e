use std::collections::BTreeMap;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::book::models::author_reference;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::validation::no_unknown_fields;
use crate::domain::validation::ValidationError;
use crate::inbound::http::handlers::optional_integer;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BookData;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(book_id): Path<String>,
    JsonBody(body): JsonBody<UpdateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    let details = state
        .book_service
        .update_book(&book_id, command)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(book_id = %book_id, user_id = %auth_user.user_id, "Book updated");

    Ok(ApiSuccess::new(StatusCode::OK, (&details).into()))
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
    published_year: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, ValidationError> {
        let title = self.title.map(BookTitle::new).transpose()?;
        let author_id = self.author.as_deref().map(author_reference).transpose()?;
        let published_year = optional_integer("publishedYear", self.published_year)?;
        no_unknown_fields(&self.extra)?;
        Ok(UpdateBookCommand {
            title,
            author_id,
            published_year,
        })
    }
}
