use super::*;

/// Tests that listing honors the limit and keeps creation order.
///
/// Expected: first `limit` books in the order they were created
#[tokio::test]
async fn respects_limit_and_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    for title in ["Book1", "Book2", "Book3"] {
        repo.create(title.to_string()).await?;
    }

    let all = repo.get_all_with_authors(10).await?;
    let titles: Vec<_> = all.iter().map(|b| b.book.title.as_str()).collect();
    assert_eq!(titles, vec!["Book1", "Book2", "Book3"]);

    let limited = repo.get_all_with_authors(1).await?;
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].book.title, "Book1");

    Ok(())
}

/// Tests that an author shared by two books appears under both.
///
/// Expected: shared author listed on each book
#[tokio::test]
async fn resolves_shared_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shared = factory::author::AuthorFactory::new(db)
        .name("Shared")
        .build()
        .await?;
    let book1 = factory::create_book(db).await?;
    let book2 = factory::create_book(db).await?;
    factory::link_author(db, book1.id, shared.id).await?;
    factory::link_author(db, book2.id, shared.id).await?;

    let repo = BookRepository::new(db);
    let all = repo.get_all_with_authors(10).await?;

    assert_eq!(all.len(), 2);
    for entry in all {
        assert_eq!(entry.author_names(), vec!["Shared"]);
    }

    Ok(())
}

/// Tests listing an empty catalog.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);

    assert!(repo.get_all_with_authors(10).await?.is_empty());

    Ok(())
}

/// Tests listing with a limit beyond what the database can bind.
///
/// Expected: Ok with every book instead of a bind failure
#[tokio::test]
async fn clamps_oversized_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book(db).await?;
    factory::create_book(db).await?;

    let repo = BookRepository::new(db);

    assert_eq!(repo.get_all_with_authors(u64::MAX).await?.len(), 2);

    Ok(())
}
