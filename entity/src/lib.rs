//! SeaORM entities for the book catalog.
//!
//! `author` and `book` are linked many-to-many through the `book_author` join
//! entity. Both sides implement `Related` with a `via` definition so either side
//! can be reached from the other through `find_related`.

pub mod prelude;

pub mod author;
pub mod book;
pub mod book_author;
