//! Author domain models and parameters.

use uuid::Uuid;

use crate::{
    model::author::{AuthorDto, AuthorPayloadDto, AuthorSummaryDto},
    server::model::book::Book,
};

/// An author row without its associations.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
}

impl Author {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts to the minimal representation nested inside a book.
    pub fn into_summary_dto(self) -> AuthorSummaryDto {
        AuthorSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// An author together with every book it is linked to.
///
/// `books` is sorted by title.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<Book>,
}

impl AuthorWithBooks {
    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.author.id,
            name: self.author.name,
            books: self.books.into_iter().map(Book::into_summary_dto).collect(),
        }
    }
}

/// Parameters for creating a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthorParam {
    pub name: String,
}

impl CreateAuthorParam {
    pub fn from_dto(dto: AuthorPayloadDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for renaming an existing author.
#[derive(Debug, Clone)]
pub struct UpdateAuthorParam {
    /// ID of the author to update.
    pub id: Uuid,
    /// Replacement name.
    pub name: String,
}

impl UpdateAuthorParam {
    pub fn from_dto(id: Uuid, dto: AuthorPayloadDto) -> Self {
        Self { id, name: dto.name }
    }
}
