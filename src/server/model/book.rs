//! Book domain models and parameters.

use uuid::Uuid;

use crate::{
    model::book::{BookDto, BookPayloadDto, BookSummaryDto},
    server::model::author::Author,
};

/// A book row without its associations.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
        }
    }

    /// Converts to the minimal representation nested inside an author.
    pub fn into_summary_dto(self) -> BookSummaryDto {
        BookSummaryDto {
            id: self.id,
            title: self.title,
        }
    }
}

/// A book together with every author it is linked to.
///
/// `authors` is sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct BookWithAuthors {
    pub book: Book,
    pub authors: Vec<Author>,
}

impl BookWithAuthors {
    /// Names of the linked authors, in the order they are stored on the model.
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().map(|a| a.name.clone()).collect()
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.book.id,
            title: self.book.title,
            authors: self
                .authors
                .into_iter()
                .map(Author::into_summary_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a new book and linking it to authors by name.
#[derive(Debug, Clone)]
pub struct CreateBookParam {
    pub title: String,
    /// Author names; unknown names become new authors.
    pub author_names: Vec<String>,
}

impl CreateBookParam {
    pub fn from_dto(dto: BookPayloadDto) -> Self {
        Self {
            title: dto.title,
            author_names: dto.authors,
        }
    }
}

/// Parameters for replacing a book's title and reconciling its authors.
#[derive(Debug, Clone)]
pub struct UpdateBookParam {
    /// ID of the book to update.
    pub id: Uuid,
    /// Replacement title.
    pub title: String,
    /// Desired author names after the update.
    pub author_names: Vec<String>,
}

impl UpdateBookParam {
    pub fn from_dto(id: Uuid, dto: BookPayloadDto) -> Self {
        Self {
            id,
            title: dto.title,
            author_names: dto.authors,
        }
    }
}
