//! API handlers and router assembly for the book store REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::any::Any;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, ErrorResponse},
    AppState,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let api = Router::new()
        .route("/api/books", get(books::list_books))
        .route("/api/books", post(books::create_book))
        .route("/api/books", delete(books::delete_all_books))
        .route("/api/books/:id", get(books::get_book))
        .route("/api/books/:id", put(books::update_book))
        .route("/api/books/:id", delete(books::delete_book))
        .route("/health", get(health::health_check))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(api)
        .merge(openapi)
        .fallback(fallback)
        .layer(middleware::map_response(unroute_unknown_methods))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

/// Handler for any path not in the route table
async fn fallback() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

/// A known path hit with an unrouted method is still an unknown endpoint
/// to callers, so fold the router's bare 405 into the fallback envelope.
async fn unroute_unknown_methods(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return AppError::NotFound("Endpoint not found".to_string()).into_response();
    }
    response
}

/// Last line of defense: turn a panicking handler into a 500 response
/// instead of tearing down the connection
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", details);

    let body = Json(ErrorResponse {
        success: false,
        message: "Internal server error".to_string(),
        error: Some(details),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
