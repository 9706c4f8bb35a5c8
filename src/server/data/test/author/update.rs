use super::*;

/// Tests renaming an author.
///
/// Expected: Ok with the new name persisted and links kept
#[tokio::test]
async fn renames_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (book, authors) = factory::create_book_with_authors(db, &["Old Name"]).await?;

    let repo = AuthorRepository::new(db);
    let updated = repo
        .update(UpdateAuthorParam {
            id: authors[0].id,
            name: "New Name".to_string(),
        })
        .await?;

    assert_eq!(updated.id, authors[0].id);
    assert_eq!(updated.name, "New Name");

    let fetched = repo.get_with_books(authors[0].id).await?.unwrap();
    assert_eq!(fetched.author.name, "New Name");
    assert_eq!(fetched.books[0].id, book.id);

    Ok(())
}

/// Tests renaming an unknown author.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let result = repo
        .update(UpdateAuthorParam {
            id: Uuid::now_v7(),
            name: "Nobody".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests renaming an author to a name that is already taken.
///
/// Expected: Err with the original name unchanged
#[tokio::test]
async fn rejects_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::author::AuthorFactory::new(db)
        .name("First")
        .build()
        .await?;
    factory::author::AuthorFactory::new(db)
        .name("Second")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let result = repo
        .update(UpdateAuthorParam {
            id: first.id,
            name: "Second".to_string(),
        })
        .await;

    assert!(result.is_err());
    let unchanged = repo.find_by_id(first.id).await?.unwrap();
    assert_eq!(unchanged.name, "First");

    Ok(())
}
