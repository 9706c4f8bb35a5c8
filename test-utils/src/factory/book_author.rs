//! Join-row factory linking books to authors.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Inserts a `book_authors` row linking the given book and author.
///
/// Both rows must already exist.
pub async fn link_author(
    db: &DatabaseConnection,
    book_id: Uuid,
    author_id: Uuid,
) -> Result<entity::book_author::Model, DbErr> {
    entity::book_author::ActiveModel {
        book_id: ActiveValue::Set(book_id),
        author_id: ActiveValue::Set(author_id),
    }
    .insert(db)
    .await
}
