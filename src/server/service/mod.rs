//! Business logic layer.
//!
//! Services open one database transaction per operation, drive the repositories inside it
//! and commit once at the end. Returning early with an error drops the transaction, which
//! rolls it back.

pub mod author;
pub mod book;
