//! Book filters
//!
//! A [`BookFilter`] is a boolean predicate over a [`Book`]. Any
//! `Fn(&Book) -> bool` closure is a filter, and filters can be chained with
//! [`CompositeFilter`], which ANDs them in insertion order and stops at the
//! first rejection.
//!
//! Every filter treats an absent book as a non-match: `apply(None)` is always
//! `false`.
//!
//! Named filters such as [`PublishedYearFilter`](crate::PublishedYearFilter)
//! are added to a composite by value. Filters already behind a
//! `Box<dyn BookFilter>` go through [`CompositeFilter::add_boxed`], and a
//! `&dyn BookFilter` can be passed anywhere a `&F: BookFilter + ?Sized` is
//! taken.

use bookstoread_core::Book;
use std::fmt;

/// Predicate deciding whether a book is included in a result
pub trait BookFilter {
    /// Returns true if `book` passes this filter
    fn matches(&self, book: &Book) -> bool;

    /// Evaluates the filter against a possibly absent book
    ///
    /// `None` never matches and never panics.
    fn apply(&self, book: Option<&Book>) -> bool {
        book.is_some_and(|b| self.matches(b))
    }
}

impl<F> BookFilter for F
where
    F: Fn(&Book) -> bool,
{
    fn matches(&self, book: &Book) -> bool {
        self(book)
    }
}

/// Ordered AND of filters with short-circuit evaluation
///
/// An empty composite accepts every book.
#[derive(Default)]
pub struct CompositeFilter<'a> {
    filters: Vec<Box<dyn BookFilter + 'a>>,
}

impl<'a> CompositeFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter; it runs after all previously added ones
    pub fn add_filter<F>(&mut self, filter: F)
    where
        F: BookFilter + 'a,
    {
        self.filters.push(Box::new(filter));
    }

    /// Builder form of [`add_filter`](Self::add_filter)
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: BookFilter + 'a,
    {
        self.add_filter(filter);
        self
    }

    /// Appends an already boxed filter, e.g. one chosen at runtime
    pub fn add_boxed(&mut self, filter: Box<dyn BookFilter + 'a>) {
        self.filters.push(filter);
    }

    /// Builder form of [`add_boxed`](Self::add_boxed)
    pub fn with_boxed(mut self, filter: Box<dyn BookFilter + 'a>) -> Self {
        self.add_boxed(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn BookFilter + 'a>> for CompositeFilter<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn BookFilter + 'a>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl BookFilter for CompositeFilter<'_> {
    fn matches(&self, book: &Book) -> bool {
        self.filters.iter().all(|filter| filter.matches(book))
    }
}

impl fmt::Debug for CompositeFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::Cell;

    fn clean_code() -> Book {
        Book::new(
            "Clean Code",
            "Robert C. Martin",
            NaiveDate::from_ymd_opt(2008, 8, 1).unwrap(),
        )
    }

    #[test]
    fn test_closure_is_a_filter() {
        let filter = |b: &Book| b.author().starts_with("Robert");
        assert!(filter.apply(Some(&clean_code())));
        assert!(!filter.apply(None));
    }

    #[test]
    fn test_composite_rejects_when_any_filter_rejects() {
        let mut composite = CompositeFilter::new();
        composite.add_filter(|_: &Book| false);
        assert!(!composite.apply(Some(&clean_code())));
    }

    #[test]
    fn test_composite_stops_at_first_rejection() {
        let first = Cell::new(0);
        let second = Cell::new(0);
        let composite = CompositeFilter::new()
            .with_filter(|_: &Book| {
                first.set(first.get() + 1);
                false
            })
            .with_filter(|_: &Book| {
                second.set(second.get() + 1);
                true
            });

        assert!(!composite.apply(Some(&clean_code())));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_empty_composite_accepts_present_books_only() {
        let composite = CompositeFilter::new();
        assert!(composite.is_empty());
        assert!(composite.apply(Some(&clean_code())));
        assert!(!composite.apply(None));
    }

    #[test]
    fn test_composite_accepts_boxed_filters() {
        let boxed: Box<dyn BookFilter> = Box::new(|b: &Book| b.published_year() > 2007);
        let composite = CompositeFilter::new()
            .with_boxed(boxed)
            .with_filter(|b: &Book| b.published_year() < 2009);
        assert_eq!(composite.len(), 2);
        assert!(composite.apply(Some(&clean_code())));
    }

    #[test]
    fn test_composite_collects_from_boxed_filters() {
        let filters: Vec<Box<dyn BookFilter>> = vec![
            Box::new(|b: &Book| b.title().starts_with("Clean")),
            Box::new(|_: &Book| false),
        ];
        let composite: CompositeFilter = filters.into_iter().collect();
        assert_eq!(composite.len(), 2);
        assert!(!composite.apply(Some(&clean_code())));
    }

    #[test]
    fn test_composite_can_nest() {
        let inner = CompositeFilter::new().with_filter(|b: &Book| b.published_year() == 2008);
        let outer = CompositeFilter::new()
            .with_filter(inner)
            .with_filter(|b: &Book| b.title().contains("Code"));
        assert_eq!(outer.len(), 2);
        assert!(outer.apply(Some(&clean_code())));
    }
}
