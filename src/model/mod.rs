//! Wire-level DTOs exchanged with API clients.

pub mod api;
pub mod author;
pub mod book;
