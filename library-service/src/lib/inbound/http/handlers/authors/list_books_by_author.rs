use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::author::models::AuthorId;
use crate::domain::book::errors::BookError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BookData;
use crate::inbound::http::router::AppState;

pub async fn list_books_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    // Reported as "Invalid author ID" rather than the parser's detail
    let author_id = AuthorId::from_string(&author_id).map_err(BookError::from)?;

    state
        .book_service
        .list_books_by_author(&author_id)
        .await
        .map_err(ApiError::from)
        .map(|books| ApiSuccess::new(StatusCode::OK, books.iter().map(Into::into).collect()))
}
