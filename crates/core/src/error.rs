//! Error types for book records
//!
//! Reading-state changes on a [`Book`](crate::Book) are one-shot: a book can be
//! started once and finished once. Violations are reported as [`BookError`]
//! so the caller can decide whether to ignore or surface them.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for book record operations
pub type Result<T> = std::result::Result<T, BookError>;

/// Errors raised while mutating or validating a book record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// `start_reading` was called on a book that already has a start date
    #[error("'{title}' was already started on {started_on}")]
    AlreadyStarted { title: String, started_on: NaiveDate },

    /// `finish_reading` was called on a book that already has a finish date
    #[error("'{title}' was already finished on {finished_on}")]
    AlreadyFinished {
        title: String,
        finished_on: NaiveDate,
    },

    /// Finish date precedes the recorded start date
    #[error("'{title}' cannot be finished on {finished_on}, before it was started on {started_on}")]
    FinishedBeforeStarted {
        title: String,
        started_on: NaiveDate,
        finished_on: NaiveDate,
    },

    /// Record failed self-validation
    #[error("Invalid book: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl BookError {
    /// Title of the book the error refers to, when known
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::AlreadyStarted { title, .. }
            | Self::AlreadyFinished { title, .. }
            | Self::FinishedBeforeStarted { title, .. } => Some(title),
            Self::Validation(_) => None,
        }
    }
}
