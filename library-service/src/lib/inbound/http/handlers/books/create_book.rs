use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::book::models::author_reference;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::validation::no_unknown_fields;
use crate::domain::validation::required;
use crate::domain::validation::ValidationError;
use crate::inbound::http::handlers::optional_integer;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BookData;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// The referenced author is not looked up; a well-formed unknown id is accepted.
pub async fn create_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CreateBookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let command = body.try_into_command()?;

    let details = state
        .book_service
        .create_book(command)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(book_id = %details.book.id, user_id = %auth_user.user_id, "Book created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&details).into()))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    title: Option<String>,
    author: Option<String>,
    published_year: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, ValidationError> {
        let title = BookTitle::new(required("title", self.title)?)?;
        let author_id = author_reference(&required("author", self.author)?)?;
        let published_year = optional_integer("publishedYear", self.published_year)?;
        no_unknown_fields(&self.extra)?;
        Ok(CreateBookCommand {
            title,
            author_id,
            published_year,
        })
    }
}
