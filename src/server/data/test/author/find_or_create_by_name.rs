use super::*;

/// Tests that an existing author is reused instead of duplicated.
///
/// Expected: Ok with the existing author returned, no new row
#[tokio::test]
async fn returns_existing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::author::AuthorFactory::new(db)
        .name("Stanislaw Lem")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let author = repo.find_or_create_by_name("Stanislaw Lem").await?;

    assert_eq!(author.id, existing.id);
    assert_eq!(Author::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an unknown name creates a new author.
///
/// Expected: Ok with a new author row
#[tokio::test]
async fn creates_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo.find_or_create_by_name("Stanislaw Lem").await?;

    assert_eq!(author.name, "Stanislaw Lem");
    assert_eq!(Author::find().count(db).await?, 1);

    let again = repo.find_or_create_by_name("Stanislaw Lem").await?;
    assert_eq!(again.id, author.id);
    assert_eq!(Author::find().count(db).await?, 1);

    Ok(())
}
