//! Core domain types for bookstoread: the book record, its reading state and
//! the progress statistics derived from a collection of books.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{BookError, Result};
pub use types::{Book, BookId, Progress, Validator};
