use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::author::models::AuthorId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Books referencing the author are left untouched.
pub async fn delete_author(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(author_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let author_id =
        AuthorId::from_string(&author_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .author_service
        .delete_author(&author_id)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(author_id = %author_id, user_id = %auth_user.user_id, "Author deleted");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Author deleted"),
    ))
}
