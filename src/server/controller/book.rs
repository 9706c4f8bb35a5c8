use axum::{extract::State, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        book::{BookDto, BookPayloadDto},
    },
    server::{
        controller::{
            extract::{ApiJson, ApiPath, ApiQuery},
            param::LimitParams,
        },
        error::AppError,
        model::book::{BookWithAuthors, CreateBookParam, UpdateBookParam},
        service::book::BookService,
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Create a new book.
///
/// Creates the book and links it to every named author. Authors that don't exist yet are
/// created, and repeated names are linked once.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Book title and author names
///
/// # Returns
/// - `200 OK` - The created book with its authors
/// - `400 Bad Request` - Title longer than 100 characters
/// - `409 Conflict` - A book with this title already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/books/",
    tag = BOOK_TAG,
    request_body = BookPayloadDto,
    responses(
        (status = 200, description = "Successfully created book", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 409, description = "Book title already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BookPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let book = service.create(CreateBookParam::from_dto(payload)).await?;

    Ok(Json(book.into_dto()))
}

/// Get a book by ID with its authors.
///
/// # Returns
/// - `200 OK` - The book with its authors
/// - `404 Not Found` - No book with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let book = service.get_by_id(book_id).await?;

    Ok(Json(book.into_dto()))
}

/// List books in creation order.
///
/// # Returns
/// - `200 OK` - Up to `limit` books with their authors
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/",
    tag = BOOK_TAG,
    params(LimitParams),
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let books = service.get_all(params.limit).await?;

    let dtos: Vec<BookDto> = books.into_iter().map(BookWithAuthors::into_dto).collect();

    Ok(Json(dtos))
}

/// Replace a book's title and author list.
///
/// Authors missing from the new list are unlinked, new names are linked (and created if
/// needed), and authors present in both are left alone. Unlinked authors are not deleted.
///
/// # Returns
/// - `200 OK` - The updated book
/// - `400 Bad Request` - Title longer than 100 characters
/// - `404 Not Found` - No book with this ID
/// - `409 Conflict` - Another book already has this title
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    request_body = BookPayloadDto,
    responses(
        (status = 200, description = "Successfully updated book", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 409, description = "Book title already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<BookPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let book = service
        .update(UpdateBookParam::from_dto(book_id, payload))
        .await?;

    Ok(Json(book.into_dto()))
}

/// Delete a book.
///
/// Removes the book's author links, then the book. Its authors are kept.
///
/// # Returns
/// - `200 OK` - `{"deleted": true}`
/// - `404 Not Found` - No book with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/books/{book_id}",
    tag = BOOK_TAG,
    params(
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted book", body = DeletedDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    service.delete(book_id).await?;

    Ok(Json(DeletedDto { deleted: true }))
}
