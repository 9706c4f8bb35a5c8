use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_author_table::Author;
use super::m20251019_000002_create_book_table::Book;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookAuthor::Table)
                    .if_not_exists()
                    .col(uuid(BookAuthor::BookId))
                    .col(uuid(BookAuthor::AuthorId))
                    .primary_key(
                        Index::create()
                            .name("pk_book_authors")
                            .col(BookAuthor::BookId)
                            .col(BookAuthor::AuthorId),
                    )
                    // No cascades: association rows are removed explicitly before
                    // either side is deleted.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_authors_book_id")
                            .from(BookAuthor::Table, BookAuthor::BookId)
                            .to(Book::Table, Book::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_authors_author_id")
                            .from(BookAuthor::Table, BookAuthor::AuthorId)
                            .to(Author::Table, Author::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookAuthor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookAuthor {
    #[sea_orm(iden = "book_authors")]
    Table,
    BookId,
    AuthorId,
}
