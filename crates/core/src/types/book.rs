//! Book domain model

use crate::error::{BookError, Result};
use crate::types::Validator;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Creates a new random BookId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookId from a UUID string
    pub fn from_string(s: &str) -> std::result::Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the BookId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book on somebody's reading list
///
/// Title, author and publication date are fixed at construction. The reading
/// dates start out empty and can each be recorded exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    published_on: NaiveDate,
    started_on: Option<NaiveDate>,
    finished_on: Option<NaiveDate>,
}

impl Book {
    /// Creates a new, unread book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            published_on,
            started_on: None,
            finished_on: None,
        }
    }

    /// Creates a new book, rejecting records that fail validation
    ///
    /// # Errors
    /// Returns [`BookError::Validation`] listing every problem found.
    pub fn try_new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_on: NaiveDate,
    ) -> Result<Self> {
        Self::new(title, author, published_on).validated()
    }

    /// Returns the book unchanged if it passes validation
    pub fn validated(self) -> Result<Self> {
        self.validate().map_err(BookError::Validation)?;
        Ok(self)
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    /// Calendar year of publication
    pub fn published_year(&self) -> i32 {
        self.published_on.year()
    }

    pub fn started_on(&self) -> Option<NaiveDate> {
        self.started_on
    }

    pub fn finished_on(&self) -> Option<NaiveDate> {
        self.finished_on
    }

    /// Returns true once a finish date has been recorded
    pub fn is_read(&self) -> bool {
        self.finished_on.is_some()
    }

    /// Returns true if the book was started but not finished
    pub fn is_in_progress(&self) -> bool {
        self.started_on.is_some() && self.finished_on.is_none()
    }

    /// Records the day reading started
    ///
    /// # Errors
    /// Returns [`BookError::AlreadyStarted`] if a start date is already set.
    pub fn start_reading(&mut self, on: NaiveDate) -> Result<()> {
        if let Some(started_on) = self.started_on {
            return Err(BookError::AlreadyStarted {
                title: self.title.clone(),
                started_on,
            });
        }
        self.started_on = Some(on);
        Ok(())
    }

    /// Records the day reading finished
    ///
    /// A book may be finished without a recorded start. When a start date
    /// exists the finish date must not precede it.
    ///
    /// # Errors
    /// - [`BookError::AlreadyFinished`] if a finish date is already set.
    /// - [`BookError::FinishedBeforeStarted`] if `on` is before the start date.
    pub fn finish_reading(&mut self, on: NaiveDate) -> Result<()> {
        if let Some(finished_on) = self.finished_on {
            return Err(BookError::AlreadyFinished {
                title: self.title.clone(),
                finished_on,
            });
        }
        if let Some(started_on) = self.started_on {
            if on < started_on {
                return Err(BookError::FinishedBeforeStarted {
                    title: self.title.clone(),
                    started_on,
                    finished_on: on,
                });
            }
        }
        self.finished_on = Some(on);
        Ok(())
    }

    /// Natural shelf order: lexicographic by title, case-sensitive
    ///
    /// Usable directly as a comparator, e.g. `|a, b| Book::natural_order(b, a)`
    /// for reverse order.
    pub fn natural_order(a: &Book, b: &Book) -> Ordering {
        a.title.cmp(&b.title)
    }
}

impl Validator for Book {
    fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if let (Some(started), Some(finished)) = (self.started_on, self.finished_on) {
            if finished < started {
                errors.push("Finish date must not be before start date".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{title='{}', author='{}', publishedOn={}}}",
            self.title, self.author, self.published_on
        )
    }
}
