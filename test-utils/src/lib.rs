//! Bookshelf Test Utils
//!
//! Shared testing utilities for the bookshelf service. Provides a builder for test contexts
//! backed by in-memory SQLite databases with table schemas generated from the SeaORM
//! entities, plus factories for seeding authors, books, and their associations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_catalog() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (book, authors) = factory::create_book_with_authors(db, &["Ann", "Bob"]).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
