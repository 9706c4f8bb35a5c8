use super::*;
use sea_orm::{ColumnTrait, QueryFilter};

/// Tests deleting an author that is linked to books.
///
/// Expected: author and its association rows removed, books kept
#[tokio::test]
async fn deletes_author_and_links_but_keeps_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, authors) = factory::create_book_with_authors(db, &["Ann", "Bob"]).await?;
    let ann = &authors[0];

    let repo = AuthorRepository::new(db);
    repo.delete(ann.id).await?;

    assert!(Author::find_by_id(ann.id).one(db).await?.is_none());
    assert!(Book::find_by_id(book.id).one(db).await?.is_some());

    let ann_links = BookAuthor::find()
        .filter(entity::book_author::Column::AuthorId.eq(ann.id))
        .count(db)
        .await?;
    assert_eq!(ann_links, 0);

    // Bob's link survives
    assert_eq!(BookAuthor::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an author without books.
///
/// Expected: Ok with author removed
#[tokio::test]
async fn deletes_unlinked_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    repo.delete(author.id).await?;

    assert_eq!(Author::find().count(db).await?, 0);

    Ok(())
}
