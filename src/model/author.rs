use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::book::BookSummaryDto;

/// Author with the books it is associated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub books: Vec<BookSummaryDto>,
}

/// Minimal author representation nested inside a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummaryDto {
    pub id: Uuid,
    pub name: String,
}

/// Request body for creating or renaming an author.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorPayloadDto {
    pub name: String,
}
