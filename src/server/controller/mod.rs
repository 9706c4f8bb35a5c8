//! HTTP request handlers.
//!
//! Controllers convert DTOs into server params, call the matching service and convert the
//! domain result back into a DTO. Errors are returned as `AppError` and rendered by its
//! `IntoResponse` implementation.

pub mod author;
pub mod book;
pub mod extract;
pub mod param;
