//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Default names and titles are
//! made unique with a process-wide counter so factories never trip the unique constraints.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let book = factory::book::BookFactory::new(&db).title("Dune").build().await?;
//! factory::link_author(&db, book.id, author.id).await?;
//!
//! let (book, authors) = factory::create_book_with_authors(&db, &["Ann", "Bob"]).await?;
//! ```
//!
//! # Available Factories
//!
//! - `author` - Create author entities
//! - `book` - Create book entities
//! - `book_author` - Create join rows between books and authors
//! - `helpers` - Counter and convenience methods creating entities with their associations

pub mod author;
pub mod book;
pub mod book_author;
pub mod helpers;

pub use author::create_author;
pub use book::create_book;
pub use book_author::link_author;
pub use helpers::create_book_with_authors;
