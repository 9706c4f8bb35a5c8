use super::*;

/// Tests removing one association.
///
/// Expected: only the targeted row removed
#[tokio::test]
async fn unlinks_single_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, authors) = factory::create_book_with_authors(db, &["Ann", "Bob"]).await?;

    let repo = BookAuthorRepository::new(db);
    let removed = repo.unlink(book.id, authors[0].id).await?;

    assert_eq!(removed, 1);
    let rows = BookAuthor::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author_id, authors[1].id);

    Ok(())
}

/// Tests removing a pair that is not linked.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unlinked_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let author = factory::create_author(db).await?;

    let repo = BookAuthorRepository::new(db);

    assert_eq!(repo.unlink(book.id, author.id).await?, 0);

    Ok(())
}

/// Tests clearing every association of a book and of an author.
///
/// Expected: row counts reported and rows removed
#[tokio::test]
async fn deletes_by_book_and_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, authors) = factory::create_book_with_authors(db, &["Ann", "Bob"]).await?;
    let other = factory::create_book(db).await?;
    factory::link_author(db, other.id, authors[0].id).await?;

    let repo = BookAuthorRepository::new(db);

    assert_eq!(repo.delete_by_book(book.id).await?, 2);
    assert_eq!(BookAuthor::find().count(db).await?, 1);

    assert_eq!(repo.delete_by_author(authors[0].id).await?, 1);
    assert_eq!(BookAuthor::find().count(db).await?, 0);

    Ok(())
}
