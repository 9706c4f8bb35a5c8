use super::*;

/// Tests creating a new book.
///
/// Expected: Ok with book persisted and no association rows
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo.create("Kindred".to_string()).await?;

    assert_eq!(book.title, "Kindred");
    assert!(Book::find_by_id(book.id).one(db).await?.is_some());
    assert_eq!(BookAuthor::find().count(db).await?, 0);

    Ok(())
}

/// Tests that book titles are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    repo.create("Kindred".to_string()).await?;
    let result = repo.create("Kindred".to_string()).await;

    assert!(result.is_err());
    assert_eq!(Book::find().count(db).await?, 1);

    Ok(())
}
