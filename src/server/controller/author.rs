use axum::{extract::State, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        author::{AuthorDto, AuthorPayloadDto},
    },
    server::{
        controller::{
            extract::{ApiJson, ApiPath, ApiQuery},
            param::LimitParams,
        },
        error::AppError,
        model::author::{AuthorWithBooks, CreateAuthorParam, UpdateAuthorParam},
        service::author::AuthorService,
        state::AppState,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

/// Create a new author.
///
/// # Returns
/// - `200 OK` - The created author with an empty book list
/// - `409 Conflict` - An author with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/authors/",
    tag = AUTHOR_TAG,
    request_body = AuthorPayloadDto,
    responses(
        (status = 200, description = "Successfully created author", body = AuthorDto),
        (status = 409, description = "Author name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AuthorPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthorService::new(&state.db);

    let author = service.create(CreateAuthorParam::from_dto(payload)).await?;

    Ok(Json(author.into_dto()))
}

/// Get an author by ID with their books.
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}",
    tag = AUTHOR_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved author", body = AuthorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    ApiPath(author_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthorService::new(&state.db);

    let author = service.get_by_id(author_id).await?;

    Ok(Json(author.into_dto()))
}

/// List authors in creation order.
#[utoipa::path(
    get,
    path = "/api/authors/",
    tag = AUTHOR_TAG,
    params(LimitParams),
    responses(
        (status = 200, description = "Successfully retrieved authors", body = Vec<AuthorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthorService::new(&state.db);

    let authors = service.get_all(params.limit).await?;

    let dtos: Vec<AuthorDto> = authors
        .into_iter()
        .map(AuthorWithBooks::into_dto)
        .collect();

    Ok(Json(dtos))
}

/// Rename an author.
///
/// The author's book links are not changed.
///
/// # Returns
/// - `200 OK` - The renamed author with their books
/// - `404 Not Found` - No author with this ID
/// - `409 Conflict` - Another author already has this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/authors/{author_id}",
    tag = AUTHOR_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    request_body = AuthorPayloadDto,
    responses(
        (status = 200, description = "Successfully updated author", body = AuthorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 409, description = "Author name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_author(
    State(state): State<AppState>,
    ApiPath(author_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AuthorPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthorService::new(&state.db);

    let author = service
        .update(UpdateAuthorParam::from_dto(author_id, payload))
        .await?;

    Ok(Json(author.into_dto()))
}

/// Delete an author.
///
/// Removes the author's book links, then the author. Their books are kept.
#[utoipa::path(
    delete,
    path = "/api/authors/{author_id}",
    tag = AUTHOR_TAG,
    params(
        ("author_id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted author", body = DeletedDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    ApiPath(author_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthorService::new(&state.db);

    service.delete(author_id).await?;

    Ok(Json(DeletedDto { deleted: true }))
}
