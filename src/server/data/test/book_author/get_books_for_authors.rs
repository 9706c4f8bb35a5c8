use super::*;

/// Tests resolving books for several authors at once.
///
/// Expected: books grouped by author and sorted by title
#[tokio::test]
async fn groups_books_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ann = factory::create_author(db).await?;
    let bob = factory::create_author(db).await?;
    let zeta = factory::book::BookFactory::new(db).title("Zeta").build().await?;
    let alpha = factory::book::BookFactory::new(db).title("Alpha").build().await?;
    factory::link_author(db, zeta.id, ann.id).await?;
    factory::link_author(db, alpha.id, ann.id).await?;
    factory::link_author(db, zeta.id, bob.id).await?;

    let repo = BookAuthorRepository::new(db);
    let books = repo.get_books_for_authors(&[ann.id, bob.id]).await?;

    let ann_titles: Vec<_> = books[&ann.id].iter().map(|b| b.title.as_str()).collect();
    assert_eq!(ann_titles, vec!["Alpha", "Zeta"]);
    let bob_titles: Vec<_> = books[&bob.id].iter().map(|b| b.title.as_str()).collect();
    assert_eq!(bob_titles, vec!["Zeta"]);

    Ok(())
}

/// Tests resolving with no IDs and with IDs that have no links.
///
/// Expected: empty maps
#[tokio::test]
async fn returns_empty_map_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = BookAuthorRepository::new(db);

    assert!(repo.get_books_for_authors(&[]).await?.is_empty());
    assert!(repo.get_books_for_authors(&[author.id]).await?.is_empty());
    assert!(repo.get_authors_for_books(&[Uuid::now_v7()]).await?.is_empty());

    Ok(())
}
