use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::author::AuthorRepository,
    error::AppError,
    model::author::{AuthorWithBooks, CreateAuthorParam, UpdateAuthorParam},
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new author with no linked books.
    ///
    /// # Returns
    /// - `Ok(AuthorWithBooks)` - The created author
    /// - `Err(AppError::Conflict)` - An author with the same name already exists
    pub async fn create(&self, param: CreateAuthorParam) -> Result<AuthorWithBooks, AppError> {
        let txn = self.db.begin().await?;
        let repo = AuthorRepository::new(&txn);

        let name = param.name.clone();
        let author = repo
            .create(param)
            .await
            .map_err(|e| AppError::conflict_or_db(e, || name_conflict(&name)))?;

        txn.commit().await?;

        tracing::info!("Created author {} '{}'", author.id, author.name);

        Ok(AuthorWithBooks {
            author,
            books: Vec::new(),
        })
    }

    /// Gets an author with its linked books.
    pub async fn get_by_id(&self, id: Uuid) -> Result<AuthorWithBooks, AppError> {
        let txn = self.db.begin().await?;

        let author = AuthorRepository::new(&txn)
            .get_with_books(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        Ok(author)
    }

    /// Gets up to `limit` authors in creation order.
    pub async fn get_all(&self, limit: u64) -> Result<Vec<AuthorWithBooks>, AppError> {
        let txn = self.db.begin().await?;

        let authors = AuthorRepository::new(&txn).get_all_with_books(limit).await?;

        txn.commit().await?;

        Ok(authors)
    }

    /// Renames an author. Linked books are left untouched.
    ///
    /// # Returns
    /// - `Ok(AuthorWithBooks)` - The renamed author with its books
    /// - `Err(AppError::NotFound)` - No author exists with the given ID
    /// - `Err(AppError::Conflict)` - Another author already has the new name
    pub async fn update(&self, param: UpdateAuthorParam) -> Result<AuthorWithBooks, AppError> {
        let txn = self.db.begin().await?;
        let repo = AuthorRepository::new(&txn);

        let id = param.id;
        let name = param.name.clone();
        repo.update(param).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => not_found(id),
            e => AppError::conflict_or_db(e, || name_conflict(&name)),
        })?;

        let author = repo.get_with_books(id).await?.ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        tracing::info!("Updated author {} to '{}'", id, author.author.name);

        Ok(author)
    }

    /// Deletes an author and its association rows. Linked books are kept.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = AuthorRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted author {}", id);

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Author with id {} not found", id))
}

pub(crate) fn name_conflict(name: &str) -> String {
    format!("Author with name '{}' already exists", name)
}
