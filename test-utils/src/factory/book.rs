//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db).title("The Dispossessed").build().await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
        }
    }

    /// Sets the book title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::Set(Uuid::now_v7()),
            title: ActiveValue::Set(self.title),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `BookFactory::new(db).build().await`.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}
