use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::author::models::AuthorName;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::validation::no_unknown_fields;
use crate::domain::validation::non_empty;
use crate::domain::validation::required;
use crate::domain::validation::ValidationError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_author(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CreateAuthorRequest>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let command = body.try_into_command()?;

    let author = state
        .author_service
        .create_author(command)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(author_id = %author.id, user_id = %auth_user.user_id, "Author created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&author).into()))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateAuthorRequest {
    name: Option<String>,
    bio: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl CreateAuthorRequest {
    fn try_into_command(self) -> Result<CreateAuthorCommand, ValidationError> {
        let name = AuthorName::new(required("name", self.name)?)?;
        let bio = self.bio.map(|bio| non_empty("bio", bio)).transpose()?;
        no_unknown_fields(&self.extra)?;
        Ok(CreateAuthorCommand { name, bio })
    }
}
