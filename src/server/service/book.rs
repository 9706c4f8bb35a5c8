use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{author::AuthorRepository, book::BookRepository, book_author::BookAuthorRepository},
    error::AppError,
    model::book::{BookWithAuthors, CreateBookParam, UpdateBookParam},
    service::author::name_conflict,
    util::reconcile::{dedupe, reconcile, Reconciliation},
};

/// Maximum number of characters allowed in a book title.
pub const TITLE_MAX_LEN: usize = 100;

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a book and links it to the named authors.
    ///
    /// Authors are looked up by name and created when missing. A name repeated in the request
    /// is linked once.
    ///
    /// # Returns
    /// - `Ok(BookWithAuthors)` - The created book with its authors
    /// - `Err(AppError::BadRequest)` - Title is longer than `TITLE_MAX_LEN`
    /// - `Err(AppError::Conflict)` - A book with the same title already exists
    pub async fn create(&self, param: CreateBookParam) -> Result<BookWithAuthors, AppError> {
        validate_title(&param.title)?;

        let txn = self.db.begin().await?;
        let repo = BookRepository::new(&txn);

        let title = param.title.clone();
        let book = repo
            .create(param.title)
            .await
            .map_err(|e| AppError::conflict_or_db(e, || title_conflict(&title)))?;

        link_authors(&txn, book.id, dedupe(&param.author_names)).await?;

        let book = repo
            .get_with_authors(book.id)
            .await?
            .ok_or_else(|| not_found(book.id))?;

        txn.commit().await?;

        tracing::info!(
            "Created book {} '{}' with {} authors",
            book.book.id,
            book.book.title,
            book.authors.len()
        );

        Ok(book)
    }

    /// Gets a book with its linked authors.
    pub async fn get_by_id(&self, id: Uuid) -> Result<BookWithAuthors, AppError> {
        let txn = self.db.begin().await?;

        let book = BookRepository::new(&txn)
            .get_with_authors(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        Ok(book)
    }

    /// Gets up to `limit` books in creation order.
    pub async fn get_all(&self, limit: u64) -> Result<Vec<BookWithAuthors>, AppError> {
        let txn = self.db.begin().await?;

        let books = BookRepository::new(&txn).get_all_with_authors(limit).await?;

        txn.commit().await?;

        Ok(books)
    }

    /// Replaces a book's title and reconciles its author links with the requested names.
    ///
    /// Links to authors missing from the request are removed, names not linked yet are
    /// looked up or created and linked, and names already linked are left as they are.
    ///
    /// # Returns
    /// - `Ok(BookWithAuthors)` - The updated book with its authors
    /// - `Err(AppError::BadRequest)` - Title is longer than `TITLE_MAX_LEN`
    /// - `Err(AppError::NotFound)` - No book exists with the given ID
    /// - `Err(AppError::Conflict)` - Another book already has the new title
    pub async fn update(&self, param: UpdateBookParam) -> Result<BookWithAuthors, AppError> {
        validate_title(&param.title)?;

        let txn = self.db.begin().await?;
        let repo = BookRepository::new(&txn);

        let id = param.id;
        let title = param.title.clone();
        repo.update_title(id, param.title)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotFound(_) => not_found(id),
                e => AppError::conflict_or_db(e, || title_conflict(&title)),
            })?;

        let links = BookAuthorRepository::new(&txn);
        let current = links
            .get_authors_for_books(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();
        let current_names: Vec<String> = current.iter().map(|a| a.name.clone()).collect();

        let Reconciliation { to_remove, to_add } =
            reconcile(&current_names, &param.author_names);

        for author in current
            .iter()
            .filter(|author| to_remove.contains(&author.name))
        {
            links.unlink(id, author.id).await?;
        }

        let added = to_add.len();
        link_authors(&txn, id, to_add).await?;

        let book = repo.get_with_authors(id).await?.ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        tracing::info!(
            "Updated book {}: {} authors unlinked, {} linked",
            id,
            to_remove.len(),
            added
        );

        Ok(book)
    }

    /// Deletes a book and its association rows. Linked authors are kept.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = BookRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted book {}", id);

        Ok(())
    }
}

/// Links each named author to the book, creating authors that don't exist yet.
async fn link_authors(
    txn: &DatabaseTransaction,
    book_id: Uuid,
    names: Vec<String>,
) -> Result<(), AppError> {
    let authors = AuthorRepository::new(txn);
    let links = BookAuthorRepository::new(txn);

    for name in names {
        let author = authors
            .find_or_create_by_name(&name)
            .await
            .map_err(|e| AppError::conflict_or_db(e, || name_conflict(&name)))?;

        links.link(book_id, author.id).await?;
    }

    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "Book title must be at most {} characters",
            TITLE_MAX_LEN
        )));
    }

    Ok(())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Book with id {} not found", id))
}

fn title_conflict(title: &str) -> String {
    format!("Book with title '{}' already exists", title)
}
