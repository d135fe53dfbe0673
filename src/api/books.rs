//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Book, AppState};

use super::{DataEnvelope, DeletedEnvelope, JsonBody};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, wrapped in `data`", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
) -> AppResult<Json<DataEnvelope<Vec<Book>>>> {
    let books = state.services.books.list().await?;
    Ok(DataEnvelope::new(books))
}

/// Get book by ISBN
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ISBN-13")),
    responses(
        (status = 200, description = "Book, wrapped in `data`", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataEnvelope<Book>>> {
    let book = state.services.books.get_by_isbn(&id).await?;
    Ok(DataEnvelope::new(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created, wrapped in `data`", body = Book),
        (status = 400, description = "Malformed book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<(StatusCode, Json<DataEnvelope<Book>>)> {
    let created = state.services.books.create(book).await?;
    Ok((StatusCode::CREATED, DataEnvelope::new(created)))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ISBN-13")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated, wrapped in `data`", body = Book),
        (status = 400, description = "Malformed book", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<Json<DataEnvelope<Book>>> {
    let updated = state.services.books.update(&id, book).await?;
    Ok(DataEnvelope::new(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ISBN-13")),
    responses(
        (status = 200, description = "Removed book, under `meta._deleted`", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedEnvelope<Book>>> {
    let deleted = state.services.books.delete(&id).await?;
    Ok(DeletedEnvelope::new(deleted))
}
