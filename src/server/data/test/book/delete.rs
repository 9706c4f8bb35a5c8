use super::*;

/// Tests deleting a book linked to authors.
///
/// Expected: book and its association rows removed, authors kept
#[tokio::test]
async fn deletes_book_and_links_but_keeps_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, authors) = factory::create_book_with_authors(db, &["Ann", "Bob"]).await?;

    let repo = BookRepository::new(db);
    repo.delete(book.id).await?;

    assert!(Book::find_by_id(book.id).one(db).await?.is_none());
    assert_eq!(BookAuthor::find().count(db).await?, 0);
    assert_eq!(Author::find().count(db).await?, authors.len() as u64);

    Ok(())
}

/// Tests that deleting one book leaves other books' links intact.
///
/// Expected: only the deleted book's links removed
#[tokio::test]
async fn keeps_links_of_other_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, _) = factory::create_book_with_authors(db, &["Ann"]).await?;
    let (other, _) = factory::create_book_with_authors(db, &["Bob"]).await?;

    let repo = BookRepository::new(db);
    repo.delete(book.id).await?;

    let remaining = repo.get_with_authors(other.id).await?.unwrap();
    assert_eq!(remaining.author_names(), vec!["Bob"]);

    Ok(())
}
