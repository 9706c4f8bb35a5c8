use axum::{routing::get, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        author::{AuthorDto, AuthorPayloadDto, AuthorSummaryDto},
        book::{BookDto, BookPayloadDto, BookSummaryDto},
    },
    server::{
        controller::{author, book},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        book::create_book,
        book::get_book,
        book::get_books,
        book::update_book,
        book::delete_book,
        author::create_author,
        author::get_author,
        author::get_authors,
        author::update_author,
        author::delete_author,
    ),
    components(schemas(
        BookDto,
        BookSummaryDto,
        BookPayloadDto,
        AuthorDto,
        AuthorSummaryDto,
        AuthorPayloadDto,
        DeletedDto,
        ErrorDto,
    )),
    tags(
        (name = "book", description = "Books and their authors"),
        (name = "author", description = "Authors and their books")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(book::get_books).post(book::create_book))
        .route("/api/books/", get(book::get_books).post(book::create_book))
        .route(
            "/api/books/{book_id}",
            get(book::get_book)
                .put(book::update_book)
                .delete(book::delete_book),
        )
        .route(
            "/api/authors",
            get(author::get_authors).post(author::create_author),
        )
        .route(
            "/api/authors/",
            get(author::get_authors).post(author::create_author),
        )
        .route(
            "/api/authors/{author_id}",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
}
