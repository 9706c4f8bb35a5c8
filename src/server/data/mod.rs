//! Database repository layer for the catalog.
//!
//! Repositories handle the CRUD operations for authors, books and the `book_authors` join
//! table. They use SeaORM entity models internally and return domain models so entities never
//! leak into the service or controller layers.
//!
//! Every repository is generic over `ConnectionTrait`, so the same code runs against a plain
//! `DatabaseConnection` (tests) or a `DatabaseTransaction` opened by a service.

/// Largest `LIMIT` the SQL drivers can bind; they encode limits as signed 64-bit integers.
pub const MAX_QUERY_LIMIT: u64 = i64::MAX as u64;

pub mod author;
pub mod book;
pub mod book_author;

#[cfg(test)]
mod test;
