//! Book CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// Envelope for the book listing
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    /// Books in insertion order
    pub data: Vec<Book>,
    /// Number of books returned
    pub count: usize,
}

/// Envelope for a single book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    pub data: Book,
}

/// Envelope for mutations returning the affected book
#[derive(Serialize, ToSchema)]
pub struct BookMessageResponse {
    pub success: bool,
    /// Confirmation of the operation
    pub message: String,
    pub data: Book,
}

/// Envelope for the delete-all operation
#[derive(Serialize, ToSchema)]
pub struct DeleteAllResponse {
    pub success: bool,
    pub message: String,
}

// Ids start at 1, so an unparseable path segment yields a value that
// can never match a stored record and falls through to "Book not found".
fn parse_id(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<BookListResponse> {
    let data = state.services.catalog.list();
    let count = data.len();

    Json(BookListResponse {
        success: true,
        data,
        count,
    })
}

/// Get a single book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_by_id(parse_id(&id))?;

    Ok(Json(BookResponse {
        success: true,
        data: book,
    }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookMessageResponse),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookMessageResponse>)> {
    let book = state.services.catalog.create(data)?;

    Ok((
        StatusCode::CREATED,
        Json(BookMessageResponse {
            success: true,
            message: "Book created successfully".to_string(),
            data: book,
        }),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookMessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<BookMessageResponse>> {
    let book = state.services.catalog.update(parse_id(&id), &data)?;

    Ok(Json(BookMessageResponse {
        success: true,
        message: "Book updated successfully".to_string(),
        data: book,
    }))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = BookMessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookMessageResponse>> {
    let book = state.services.catalog.delete(parse_id(&id))?;

    Ok(Json(BookMessageResponse {
        success: true,
        message: "Book deleted successfully".to_string(),
        data: book,
    }))
}

/// Delete every book and reset the id counter
#[utoipa::path(
    delete,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_books(State(state): State<crate::AppState>) -> Json<DeleteAllResponse> {
    let count = state.services.catalog.delete_all();

    Json(DeleteAllResponse {
        success: true,
        message: format!("All {} books deleted successfully", count),
    })
}
