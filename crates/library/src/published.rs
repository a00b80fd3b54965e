//! Publication date filters

use crate::filter::BookFilter;
use bookstoread_core::Book;
use chrono::NaiveDate;

/// Filters books by publication date relative to the last day of a year
///
/// `after(2007)` keeps books published after 2007-12-31, `before(2007)` keeps
/// books published before 2007-12-31. A filter without any bound matches
/// nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishedYearFilter {
    after: Option<NaiveDate>,
    before: Option<NaiveDate>,
}

impl PublishedYearFilter {
    /// Books published strictly after December 31 of `year`
    pub fn after(year: i32) -> Self {
        Self {
            after: year_end(year),
            before: None,
        }
    }

    /// Books published strictly before December 31 of `year`
    pub fn before(year: i32) -> Self {
        Self {
            after: None,
            before: year_end(year),
        }
    }

    /// Books published after December 31 of `after_year` and before
    /// December 31 of `before_year`
    pub fn between(after_year: i32, before_year: i32) -> Self {
        match (year_end(after_year), year_end(before_year)) {
            (Some(after), Some(before)) => Self {
                after: Some(after),
                before: Some(before),
            },
            // a half-built range would silently widen the match
            _ => Self::default(),
        }
    }

    /// Returns true if at least one bound is set
    pub fn is_bounded(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }
}

/// Dec 31 of `year`, or `None` outside the representable date range
fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

impl BookFilter for PublishedYearFilter {
    fn matches(&self, book: &Book) -> bool {
        if !self.is_bounded() {
            return false;
        }
        let published = book.published_on();
        self.after.is_none_or(|after| published > after)
            && self.before.is_none_or(|before| published < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published(y: i32, m: u32, d: u32) -> Book {
        Book::new("Any", "Anyone", NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_after_year() {
        let filter = PublishedYearFilter::after(2007);
        assert!(filter.apply(Some(&published(2008, 8, 1))));
        assert!(!filter.apply(Some(&published(2004, 6, 9))));
    }

    #[test]
    fn test_before_year() {
        let filter = PublishedYearFilter::before(2007);
        assert!(!filter.apply(Some(&published(2008, 8, 1))));
        assert!(filter.apply(Some(&published(2004, 6, 9))));
    }

    #[test]
    fn test_boundary_day_is_excluded() {
        let last_day = published(2007, 12, 31);
        assert!(!PublishedYearFilter::after(2007).matches(&last_day));
        assert!(!PublishedYearFilter::before(2007).matches(&last_day));
        assert!(PublishedYearFilter::after(2006).matches(&last_day));
        assert!(PublishedYearFilter::before(2007).matches(&published(2007, 12, 30)));
    }

    #[test]
    fn test_between_years() {
        let filter = PublishedYearFilter::between(2003, 2007);
        assert!(filter.matches(&published(2004, 6, 9)));
        assert!(!filter.matches(&published(2008, 8, 1)));
        assert!(!filter.matches(&published(2002, 3, 9)));
    }

    #[test]
    fn test_unbounded_filter_matches_nothing() {
        let filter = PublishedYearFilter::default();
        assert!(!filter.is_bounded());
        assert!(!filter.matches(&published(2008, 8, 1)));
    }

    #[test]
    fn test_unrepresentable_year_matches_nothing() {
        let filter = PublishedYearFilter::after(i32::MAX);
        assert!(!filter.is_bounded());
        assert!(!filter.matches(&published(2008, 8, 1)));

        let range = PublishedYearFilter::between(2000, i32::MIN);
        assert!(!range.matches(&published(2008, 8, 1)));
    }

    #[test]
    fn test_absent_book_never_matches() {
        assert!(!PublishedYearFilter::after(2007).apply(None));
        assert!(!PublishedYearFilter::before(2007).apply(None));
    }
}
