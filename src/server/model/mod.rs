//! Domain models and operation parameters used inside the server.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary,
//! and controllers convert them into DTOs on the way out.

pub mod author;
pub mod book;
