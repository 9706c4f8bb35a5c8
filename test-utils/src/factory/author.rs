//! Author factory for creating test author entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let author = AuthorFactory::new(&db).name("Ursula K. Le Guin").build().await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Author {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Author {}", id),
        }
    }

    /// Sets the author name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the author entity into the database.
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            id: ActiveValue::Set(Uuid::now_v7()),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
///
/// Shorthand for `AuthorFactory::new(db).build().await`.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
