use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::author::models::AuthorId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::router::AppState;

pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    let author_id =
        AuthorId::from_string(&author_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .author_service
        .get_author(&author_id)
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
