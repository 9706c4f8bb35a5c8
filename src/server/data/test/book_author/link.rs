use super::*;

/// Tests linking a book and an author.
///
/// Expected: one association row
#[tokio::test]
async fn links_book_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let author = factory::create_author(db).await?;

    let repo = BookAuthorRepository::new(db);
    repo.link(book.id, author.id).await?;

    let rows = BookAuthor::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].book_id, book.id);
    assert_eq!(rows[0].author_id, author.id);

    Ok(())
}

/// Tests that the same pair cannot be linked twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let author = factory::create_author(db).await?;

    let repo = BookAuthorRepository::new(db);
    repo.link(book.id, author.id).await?;
    let result = repo.link(book.id, author.id).await;

    assert!(result.is_err());
    assert_eq!(BookAuthor::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking to an author that does not exist.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn rejects_link_to_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookAuthorRepository::new(db);
    let result = repo.link(book.id, Uuid::now_v7()).await;

    assert!(result.is_err());

    Ok(())
}
