//! Shared fixtures for bookshelf integration tests

#![allow(dead_code)]

use bookstoread_core::Book;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const EFFECTIVE_JAVA: &str = "Effective Java";
pub const CODE_COMPLETE: &str = "Code Complete";
pub const MYTHICAL_MAN_MONTH: &str = "The Mythical Man-Month";
pub const CLEAN_CODE: &str = "Clean Code";
pub const REFACTORING: &str = "Refactoring: Improving the Design of Existing Code";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

/// The classic reading list, keyed by title
pub fn books() -> HashMap<String, Book> {
    init_logging();
    [
        Book::new(EFFECTIVE_JAVA, "Joshua Bloch", date(2008, 5, 8)),
        Book::new(CODE_COMPLETE, "Steve McConnell", date(2004, 6, 9)),
        Book::new(MYTHICAL_MAN_MONTH, "Frederick Phillips Brooks", date(1975, 1, 1)),
        Book::new(CLEAN_CODE, "Robert C. Martin", date(2008, 8, 1)),
        Book::new(REFACTORING, "Martin Fowler", date(2002, 3, 9)),
    ]
    .into_iter()
    .map(|book| (book.title().to_string(), book))
    .collect()
}

/// Clones the named fixtures, in the given order
pub fn pick(books: &HashMap<String, Book>, titles: &[&str]) -> Vec<Book> {
    titles.iter().map(|t| books[*t].clone()).collect()
}
