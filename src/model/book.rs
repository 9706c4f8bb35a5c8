use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::author::AuthorSummaryDto;

/// Book with the authors it is associated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub authors: Vec<AuthorSummaryDto>,
}

/// Minimal book representation nested inside an author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummaryDto {
    pub id: Uuid,
    pub title: String,
}

/// Request body for creating or replacing a book.
///
/// `authors` holds author names. Unknown names are created as new authors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookPayloadDto {
    pub title: String,
    pub authors: Vec<String>,
}
