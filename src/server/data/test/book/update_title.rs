use super::*;

/// Tests replacing a book's title.
///
/// Expected: Ok with new title persisted
#[tokio::test]
async fn replaces_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let updated = repo.update_title(book.id, "new_title".to_string()).await?;

    assert_eq!(updated.id, book.id);
    assert_eq!(updated.title, "new_title");
    assert_eq!(
        Book::find_by_id(book.id).one(db).await?.unwrap().title,
        "new_title"
    );

    Ok(())
}

/// Tests keeping the same title.
///
/// Expected: Ok, a book may be saved under its own title
#[tokio::test]
async fn accepts_unchanged_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let updated = repo.update_title(book.id, book.title.clone()).await?;

    assert_eq!(updated.title, book.title);

    Ok(())
}

/// Tests updating an unknown book.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let result = repo.update_title(Uuid::now_v7(), "Title".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests taking the title of another book.
///
/// Expected: Err
#[tokio::test]
async fn rejects_taken_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_book(db).await?;
    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let result = repo.update_title(book.id, taken.title.clone()).await;

    assert!(result.is_err());

    Ok(())
}
