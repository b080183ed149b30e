use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::handler::Handler;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::register;
use super::handlers::authors::create_author;
use super::handlers::authors::delete_author;
use super::handlers::authors::get_author;
use super::handlers::authors::list_authors;
use super::handlers::authors::list_books_by_author;
use super::handlers::authors::update_author;
use super::handlers::books::create_book;
use super::handlers::books::delete_book;
use super::handlers::books::get_book;
use super::handlers::books::list_books;
use super::handlers::books::update_book;
use super::handlers::not_found;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::MessageData;
use super::middleware::authenticate as auth_middleware;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared handler state. Services sit behind their ports so the router can be
/// driven by any repository implementation.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub author_service: Arc<dyn AuthorServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    author_service: Arc<dyn AuthorServicePort>,
    book_service: Arc<dyn BookServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        author_service,
        book_service,
        authenticator,
    };

    // Writes and user lookups go through the bearer-token gate; every path
    // answers unsupported methods with the same 404 as an unknown path.
    let require_token = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let api_routes = Router::new()
        .route("/api/auth/register", post(register).fallback(not_found))
        .route("/api/auth/login", post(login).fallback(not_found))
        .route(
            "/api/authors",
            get(list_authors)
                .post(create_author.layer(require_token.clone()))
                .fallback(not_found),
        )
        .route(
            "/api/authors/:id",
            get(get_author)
                .put(update_author.layer(require_token.clone()))
                .delete(delete_author.layer(require_token.clone()))
                .fallback(not_found),
        )
        .route(
            "/api/authors/:id/books",
            get(list_books_by_author).fallback(not_found),
        )
        .route(
            "/api/books",
            get(list_books)
                .post(create_book.layer(require_token.clone()))
                .fallback(not_found),
        )
        .route(
            "/api/books/:id",
            get(get_book)
                .put(update_book.layer(require_token.clone()))
                .delete(delete_book.layer(require_token.clone()))
                .fallback(not_found),
        )
        .route(
            "/api/users",
            get(list_users.layer(require_token.clone())).fallback(not_found),
        )
        .route(
            "/api/users/:id",
            get(get_user.layer(require_token)).fallback(not_found),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(api_routes)
        .fallback(not_found)
        .layer(trace_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageData::new("Internal server error")),
    )
        .into_response()
}
