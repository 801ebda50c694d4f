//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BookFields;

/// All books
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub books: Vec<Book>,
}

/// A single book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

/// A book with a confirmation message (create/update)
#[derive(Serialize, ToSchema)]
pub struct BookMessageResponse {
    pub message: String,
    pub book: Book,
}

/// Confirmation message only (delete)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all books
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    responses(
        (status = 200, description = "All books, ascending id", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list().await?;
    Ok(Json(BookListResponse { books }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/book/{id}",
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
    Path(id): Path<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(BookResponse { book }))
}

/// Get a book by ISBN (exact match, digits only)
#[utoipa::path(
    get,
    path = "/book/find-by-isbn/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "ISBN digits, compared verbatim")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookResponse>> {
    // The lookup route only matches digit strings
    if isbn.is_empty() || !isbn.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound("Book not found".to_string()));
    }
    let book = state.services.books.get_by_isbn(&isbn).await?;
    Ok(Json(BookResponse { book }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/book/new",
    tag = "books",
    request_body(
        content = crate::models::BookInput,
        content_type = "application/x-www-form-urlencoded",
        description = "Fields title, author, isbn, published-year, genre"
    ),
    responses(
        (status = 201, description = "Book created", body = BookMessageResponse),
        (status = 422, description = "Field violations", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    BookFields(input): BookFields,
) -> AppResult<(StatusCode, Json<BookMessageResponse>)> {
    let book = state.services.books.create(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookMessageResponse {
            message: "Book created successfully!".to_string(),
            book,
        }),
    ))
}

/// Overwrite all fields of a book
#[utoipa::path(
    put,
    path = "/book/{id}/update",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body(
        content = crate::models::BookInput,
        content_type = "application/x-www-form-urlencoded",
        description = "Fields title, author, isbn, published-year, genre"
    ),
    responses(
        (status = 200, description = "Book updated", body = BookMessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Field violations", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    BookFields(input): BookFields,
) -> AppResult<Json<BookMessageResponse>> {
    let book = state.services.books.update(id, &input).await?;
    Ok(Json(BookMessageResponse {
        message: "Book updated successfully!".to_string(),
        book,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book/{id}/delete",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Book deleted successfully!".to_string(),
    }))
}
