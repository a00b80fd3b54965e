//! Reading progress statistics

use serde::{Deserialize, Serialize};

/// Reading progress over a collection of books
///
/// Percentages are whole numbers truncated toward zero, so `completed` and
/// `to_read` may sum to less than 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Percentage of books with a finish date
    pub completed: u32,
    /// Percentage of books without a finish date
    pub to_read: u32,
    /// Number of books started but not finished
    pub in_progress: usize,
}

impl Progress {
    /// Computes progress from raw counts
    ///
    /// Read and in-progress books are disjoint, so together they cannot
    /// exceed `total`.
    ///
    /// Returns `None` when `total` is zero, since no percentage is defined,
    /// or when the counts are inconsistent.
    pub fn from_counts(total: usize, read: usize, in_progress: usize) -> Option<Self> {
        if total == 0 || read.checked_add(in_progress)? > total {
            return None;
        }
        let unread = total - read;
        Some(Self {
            completed: percentage(read, total),
            to_read: percentage(unread, total),
            in_progress,
        })
    }

    /// Returns true if every book has been read
    pub fn is_complete(&self) -> bool {
        self.to_read == 0
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    // part <= total, so the result is at most 100
    (part * 100 / total) as u32
}
