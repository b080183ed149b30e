use std::collections::BTreeMap;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::author::models::AuthorId;
use crate::domain::author::models::AuthorName;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::validation::no_unknown_fields;
use crate::domain::validation::non_empty;
use crate::domain::validation::ValidationError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_author(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(author_id): Path<String>,
    JsonBody(body): JsonBody<UpdateAuthorRequest>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let author_id =
        AuthorId::from_string(&author_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    let author = state
        .author_service
        .update_author(&author_id, command)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(author_id = %author.id, user_id = %auth_user.user_id, "Author updated");

    Ok(ApiSuccess::new(StatusCode::OK, (&author).into()))
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateAuthorRequest {
    name: Option<String>,
    bio: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl UpdateAuthorRequest {
    fn try_into_command(self) -> Result<UpdateAuthorCommand, ValidationError> {
        let name = self.name.map(AuthorName::new).transpose()?;
        let bio = self.bio.map(|bio| non_empty("bio", bio)).transpose()?;
        no_unknown_fields(&self.extra)?;
        Ok(UpdateAuthorCommand { name, bio })
    }
}
