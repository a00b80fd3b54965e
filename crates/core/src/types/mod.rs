//! Domain types for bookstoread
//!
//! - `book`: Book record and its identifier
//! - `stats`: Reading progress statistics
//! - `common`: Shared traits

mod book;
mod common;
mod stats;

pub use book::{Book, BookId};
pub use common::Validator;
pub use stats::Progress;
