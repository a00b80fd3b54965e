//! The bookshelf: an ordered, optionally bounded collection of books

use crate::config::{Capacity, ShelfConfig};
use crate::error::{LibraryError, Result};
use crate::filter::BookFilter;
use bookstoread_core::{Book, BookId, Progress, Validator};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered collection of books with an optional capacity
///
/// Insertion order is the canonical order. Sorting and searching return new
/// views and never reorder the stored books.
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    books: Vec<Book>,
    capacity: Capacity,
}

impl Shelf {
    /// Creates an empty, unbounded shelf
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shelf holding at most `capacity` books
    ///
    /// # Errors
    /// Returns [`LibraryError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LibraryError::InvalidCapacity(capacity));
        }
        debug!("Creating bookshelf with capacity {}", capacity);
        Ok(Self {
            books: Vec::new(),
            capacity: Capacity::Limited(capacity),
        })
    }

    /// Creates an empty shelf from a validated config
    pub fn with_config(config: ShelfConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|errors| LibraryError::InvalidConfig(errors.join("; ")))?;
        debug!("Creating bookshelf from config (capacity: {})", config.capacity);
        match config.capacity {
            Capacity::Unbounded => Ok(Self::new()),
            Capacity::Limited(max) => Self::with_capacity(max),
        }
    }

    /// Appends books in order
    ///
    /// Stops at the first book that does not fit. Books appended earlier in
    /// the same call stay on the shelf; the rest are dropped.
    ///
    /// # Errors
    /// Returns [`LibraryError::CapacityExceeded`] once the shelf is full.
    pub fn add<I>(&mut self, books: I) -> Result<()>
    where
        I: IntoIterator<Item = Book>,
    {
        for book in books {
            if let Capacity::Limited(capacity) = self.capacity {
                if self.books.len() >= capacity {
                    return Err(LibraryError::CapacityExceeded { capacity });
                }
            }
            debug!("Adding '{}' ({}) to bookshelf", book.title(), book.id());
            self.books.push(book);
        }
        Ok(())
    }

    /// Books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Free slots left, or `None` for an unbounded shelf
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.capacity.remaining(self.books.len())
    }

    /// Looks up a book by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// Looks up a book by id for recording reading progress
    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id() == id)
    }

    /// Books sorted by title
    pub fn arrange(&self) -> Vec<&Book> {
        self.arrange_by(Book::natural_order)
    }

    /// Books sorted by a caller-supplied comparator
    ///
    /// The sort is stable, so books comparing equal keep insertion order.
    pub fn arrange_by<F>(&self, mut criteria: F) -> Vec<&Book>
    where
        F: FnMut(&Book, &Book) -> Ordering,
    {
        let mut arranged: Vec<&Book> = self.books.iter().collect();
        arranged.sort_by(|a, b| criteria(*a, *b));
        arranged
    }

    /// Partitions the books by `key_fn`
    ///
    /// Within each group books keep their insertion order.
    pub fn group_by<K, F>(&self, key_fn: F) -> HashMap<K, Vec<&Book>>
    where
        K: Eq + Hash,
        F: Fn(&Book) -> K,
    {
        let mut groups: HashMap<K, Vec<&Book>> = HashMap::new();
        for book in &self.books {
            groups.entry(key_fn(book)).or_default().push(book);
        }
        trace!("Grouped {} books into {} groups", self.books.len(), groups.len());
        groups
    }

    /// Reading progress across all books on the shelf
    ///
    /// # Errors
    /// Returns [`LibraryError::DivisionUndefined`] for an empty shelf.
    pub fn progress(&self) -> Result<Progress> {
        let read = self.books.iter().filter(|b| b.is_read()).count();
        let in_progress = self.books.iter().filter(|b| b.is_in_progress()).count();
        Progress::from_counts(self.books.len(), read, in_progress)
            .ok_or(LibraryError::DivisionUndefined)
    }

    /// Books whose title contains `query`, ignoring case
    pub fn find_books_by_title(&self, query: &str) -> Vec<&Book> {
        self.find_books_by_title_with(query, &|_: &Book| true)
    }

    /// Books whose title contains `query`, ignoring case, that also pass
    /// `filter`
    pub fn find_books_by_title_with<F>(&self, query: &str, filter: &F) -> Vec<&Book>
    where
        F: BookFilter + ?Sized,
    {
        let needle = query.to_lowercase();
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| b.title().to_lowercase().contains(&needle))
            .filter(|b| filter.apply(Some(*b)))
            .collect();
        trace!("Title search '{}' matched {} books", query, found.len());
        found
    }
}
