use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::router::AppState;

pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AuthorData>>, ApiError> {
    state
        .author_service
        .list_authors()
        .await
        .map_err(ApiError::from)
        .map(|authors| ApiSuccess::new(StatusCode::OK, authors.iter().map(Into::into).collect()))
}
