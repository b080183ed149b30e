use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookDetails;
use crate::domain::user::models::User;
use crate::domain::validation::whole_number;
use crate::domain::validation::ValidationError;
use crate::user::errors::UserError;

pub mod auth;
pub mod authors;
pub mod books;
pub mod users;

/// JSON body extractor whose rejections (malformed JSON, wrong types, missing
/// content type) render as 400 `ApiError`s.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Successful response: status code plus a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(MessageData { message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::Validation(_)
            | UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Password(_) | UserError::Token(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthorError> for ApiError {
    fn from(err: AuthorError) -> Self {
        match err {
            AuthorError::InvalidAuthorId(_) | AuthorError::Validation(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthorError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AuthorError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidBookId(_)
            | BookError::InvalidAuthorId(_)
            | BookError::Validation(_) => ApiError::BadRequest(err.to_string()),
            BookError::NotFound(_) | BookError::NoBooksForAuthor(_) => {
                ApiError::NotFound(err.to_string())
            }
            BookError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// `{"message": "..."}`, used for errors and plain acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fallback for unmatched routes and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorData {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Author> for AuthorData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.as_str().to_string(),
            bio: author.bio.clone(),
            created_at: author.created_at,
        }
    }
}

/// Book as returned to clients. `author` is the stored reference;
/// `author_name` is null once that author is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_name: Option<String>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<&BookDetails> for BookData {
    fn from(details: &BookDetails) -> Self {
        let book = &details.book;
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author_id.to_string(),
            author_name: details.author_name.clone(),
            published_year: book.published_year,
            created_at: book.created_at,
        }
    }
}

/// Public view of a user. The password hash has no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Read an optional integer field the way loosely typed clients send it:
/// a JSON number or a numeric string. `null` counts as absent.
pub fn optional_integer(
    field: &'static str,
    value: Option<Value>,
) -> Result<Option<i32>, ValidationError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    number
        .ok_or(ValidationError::NotANumber(field))
        .and_then(|n| whole_number(field, n))
        .map(Some)
}
