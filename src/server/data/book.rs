use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    data::{book_author::BookAuthorRepository, MAX_QUERY_LIMIT},
    model::book::{Book, BookWithAuthors},
};

/// Repository providing database operations for books.
///
/// Only the `books` table is written here, apart from `delete` which clears the book's
/// association rows first. Linking authors is driven by the book service through
/// `BookAuthorRepository`.
pub struct BookRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new book with a freshly generated time-ordered ID.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book
    /// - `Err(DbErr)` - A book with the same title exists, or another database error
    pub async fn create(&self, title: String) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            id: ActiveValue::Set(Uuid::now_v7()),
            title: ActiveValue::Set(title),
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Gets a book by ID together with its linked authors.
    pub async fn get_with_authors(&self, id: Uuid) -> Result<Option<BookWithAuthors>, DbErr> {
        let Some(book) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut authors = BookAuthorRepository::new(self.db)
            .get_authors_for_books(&[book.id])
            .await?;

        Ok(Some(BookWithAuthors {
            authors: authors.remove(&book.id).unwrap_or_default(),
            book,
        }))
    }

    /// Gets up to `limit` books in creation order, each with its linked authors.
    pub async fn get_all_with_authors(&self, limit: u64) -> Result<Vec<BookWithAuthors>, DbErr> {
        let books: Vec<Book> = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .limit(limit.min(MAX_QUERY_LIMIT))
            .all(self.db)
            .await?
            .into_iter()
            .map(Book::from_entity)
            .collect();

        let ids: Vec<Uuid> = books.iter().map(|b| b.id).collect();
        let mut authors = BookAuthorRepository::new(self.db)
            .get_authors_for_books(&ids)
            .await?;

        Ok(books
            .into_iter()
            .map(|book| BookWithAuthors {
                authors: authors.remove(&book.id).unwrap_or_default(),
                book,
            })
            .collect())
    }

    /// Replaces a book's title.
    ///
    /// # Returns
    /// - `Ok(Book)` - The updated book
    /// - `Err(DbErr::RecordNotFound)` - No book exists with the specified ID
    /// - `Err(DbErr)` - The new title is taken, or another database error
    pub async fn update_title(&self, id: Uuid, title: String) -> Result<Book, DbErr> {
        let book = entity::prelude::Book::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Book with id {} not found",
                id
            )))?;

        let mut active_model: entity::book::ActiveModel = book.into();
        active_model.title = ActiveValue::Set(title);

        let entity = active_model.update(self.db).await?;

        Ok(Book::from_entity(entity))
    }

    /// Deletes a book after removing all of its association rows.
    ///
    /// Linked authors are not deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        let unlinked = BookAuthorRepository::new(self.db)
            .delete_by_book(id)
            .await?;

        entity::prelude::Book::delete_by_id(id)
            .exec(self.db)
            .await?;

        tracing::debug!("Deleted book {} and {} association rows", id, unlinked);

        Ok(())
    }
}
