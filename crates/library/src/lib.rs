//! bookstoread library
//!
//! The bookshelf and its search filters. A [`Shelf`] owns an ordered,
//! optionally bounded collection of books and answers sorting, grouping,
//! search and progress queries over it. Searches can be narrowed with any
//! [`BookFilter`], including closures, [`PublishedYearFilter`] and
//! [`CompositeFilter`] chains.

pub mod config;
pub mod error;
pub mod filter;
pub mod published;
pub mod shelf;

pub use config::{Capacity, ShelfConfig};
pub use error::{LibraryError, LibraryResult};
pub use filter::{BookFilter, CompositeFilter};
pub use published::PublishedYearFilter;
pub use shelf::Shelf;
