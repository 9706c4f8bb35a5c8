//! Repository for the `book_authors` join table.
//!
//! Besides inserting and removing association rows, this repository resolves the related
//! side of the many-to-many relation in bulk: one query for the join rows, one `IN` query
//! for the related rows, merged in memory.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::{author::Author, book::Book};

pub struct BookAuthorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookAuthorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a book to an author.
    ///
    /// # Returns
    /// - `Ok(())` - Association row inserted
    /// - `Err(DbErr)` - The pair is already linked, either side is missing, or another
    ///   database error occurred
    pub async fn link(&self, book_id: Uuid, author_id: Uuid) -> Result<(), DbErr> {
        entity::book_author::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            author_id: ActiveValue::Set(author_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the association between a book and an author.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 if the pair was not linked)
    pub async fn unlink(&self, book_id: Uuid, author_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::BookAuthor::delete_many()
            .filter(entity::book_author::Column::BookId.eq(book_id))
            .filter(entity::book_author::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every association row of a book.
    pub async fn delete_by_book(&self, book_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::BookAuthor::delete_many()
            .filter(entity::book_author::Column::BookId.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every association row of an author.
    pub async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::BookAuthor::delete_many()
            .filter(entity::book_author::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the authors linked to each of the given books.
    ///
    /// Books without authors are absent from the returned map. Each author list is sorted
    /// by name.
    ///
    /// # Arguments
    /// - `book_ids` - IDs of the books to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<Uuid, Vec<Author>>)` - Authors keyed by book ID
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_authors_for_books(
        &self,
        book_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Author>>, DbErr> {
        if book_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::BookAuthor::find()
            .filter(entity::book_author::Column::BookId.is_in(book_ids.iter().copied()))
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let authors_map: HashMap<Uuid, Author> = entity::prelude::Author::find()
            .filter(entity::author::Column::Id.is_in(links.iter().map(|l| l.author_id)))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, Author::from_entity(a)))
            .collect();

        let mut result: HashMap<Uuid, Vec<Author>> = HashMap::new();
        for link in links {
            if let Some(author) = authors_map.get(&link.author_id) {
                result.entry(link.book_id).or_default().push(author.clone());
            }
        }

        for authors in result.values_mut() {
            authors.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(result)
    }

    /// Gets the books linked to each of the given authors.
    ///
    /// Authors without books are absent from the returned map. Each book list is sorted
    /// by title.
    ///
    /// # Arguments
    /// - `author_ids` - IDs of the authors to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<Uuid, Vec<Book>>)` - Books keyed by author ID
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_books_for_authors(
        &self,
        author_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Book>>, DbErr> {
        if author_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::BookAuthor::find()
            .filter(entity::book_author::Column::AuthorId.is_in(author_ids.iter().copied()))
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let books_map: HashMap<Uuid, Book> = entity::prelude::Book::find()
            .filter(entity::book::Column::Id.is_in(links.iter().map(|l| l.book_id)))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, Book::from_entity(b)))
            .collect();

        let mut result: HashMap<Uuid, Vec<Book>> = HashMap::new();
        for link in links {
            if let Some(book) = books_map.get(&link.book_id) {
                result.entry(link.author_id).or_default().push(book.clone());
            }
        }

        for books in result.values_mut() {
            books.sort_by(|a, b| a.title.cmp(&b.title));
        }

        Ok(result)
    }
}
