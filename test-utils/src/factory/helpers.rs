//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a book with a default title linked to one author per given name.
///
/// Authors are always created fresh, so the names must not already exist in the database.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_names` - Names of the authors to create and link
///
/// # Returns
/// - `Ok((book, authors))` - The created book and its authors in the order given
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_authors(
    db: &DatabaseConnection,
    author_names: &[&str],
) -> Result<(entity::book::Model, Vec<entity::author::Model>), DbErr> {
    let book = crate::factory::book::create_book(db).await?;

    let mut authors = Vec::with_capacity(author_names.len());
    for name in author_names {
        let author = crate::factory::author::AuthorFactory::new(db)
            .name(*name)
            .build()
            .await?;
        crate::factory::book_author::link_author(db, book.id, author.id).await?;
        authors.push(author);
    }

    Ok((book, authors))
}
