use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    data::{book_author::BookAuthorRepository, MAX_QUERY_LIMIT},
    model::author::{Author, AuthorWithBooks, CreateAuthorParam, UpdateAuthorParam},
};

/// Repository providing database operations for authors.
pub struct AuthorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new author with a freshly generated time-ordered ID.
    ///
    /// # Returns
    /// - `Ok(Author)` - The created author
    /// - `Err(DbErr)` - An author with the same name exists, or another database error
    pub async fn create(&self, param: CreateAuthorParam) -> Result<Author, DbErr> {
        let entity = entity::author::ActiveModel {
            id: ActiveValue::Set(Uuid::now_v7()),
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await?;

        Ok(Author::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Author::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find()
            .filter(entity::author::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Author::from_entity))
    }

    /// Looks up an author by name, creating it if no author has that name yet.
    ///
    /// # Returns
    /// - `Ok(Author)` - The existing or newly created author
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn find_or_create_by_name(&self, name: &str) -> Result<Author, DbErr> {
        if let Some(author) = self.find_by_name(name).await? {
            return Ok(author);
        }

        tracing::debug!("Creating author '{}'", name);

        self.create(CreateAuthorParam {
            name: name.to_string(),
        })
        .await
    }

    /// Gets an author by ID together with its linked books.
    pub async fn get_with_books(&self, id: Uuid) -> Result<Option<AuthorWithBooks>, DbErr> {
        let Some(author) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut books = BookAuthorRepository::new(self.db)
            .get_books_for_authors(&[author.id])
            .await?;

        Ok(Some(AuthorWithBooks {
            books: books.remove(&author.id).unwrap_or_default(),
            author,
        }))
    }

    /// Gets up to `limit` authors in creation order, each with its linked books.
    ///
    /// IDs are UUIDv7, so ascending ID order is creation order.
    pub async fn get_all_with_books(&self, limit: u64) -> Result<Vec<AuthorWithBooks>, DbErr> {
        let authors: Vec<Author> = entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::Id)
            .limit(limit.min(MAX_QUERY_LIMIT))
            .all(self.db)
            .await?
            .into_iter()
            .map(Author::from_entity)
            .collect();

        let ids: Vec<Uuid> = authors.iter().map(|a| a.id).collect();
        let mut books = BookAuthorRepository::new(self.db)
            .get_books_for_authors(&ids)
            .await?;

        Ok(authors
            .into_iter()
            .map(|author| AuthorWithBooks {
                books: books.remove(&author.id).unwrap_or_default(),
                author,
            })
            .collect())
    }

    /// Replaces an author's name. Associations are left untouched.
    ///
    /// # Returns
    /// - `Ok(Author)` - The updated author
    /// - `Err(DbErr::RecordNotFound)` - No author exists with the specified ID
    /// - `Err(DbErr)` - The new name is taken, or another database error
    pub async fn update(&self, param: UpdateAuthorParam) -> Result<Author, DbErr> {
        let author = entity::prelude::Author::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Author with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::author::ActiveModel = author.into();
        active_model.name = ActiveValue::Set(param.name);

        let entity = active_model.update(self.db).await?;

        Ok(Author::from_entity(entity))
    }

    /// Deletes an author after removing all of its association rows.
    ///
    /// Linked books are not deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        let unlinked = BookAuthorRepository::new(self.db)
            .delete_by_author(id)
            .await?;

        entity::prelude::Author::delete_by_id(id)
            .exec(self.db)
            .await?;

        tracing::debug!("Deleted author {} and {} association rows", id, unlinked);

        Ok(())
    }
}
