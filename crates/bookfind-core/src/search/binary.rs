//! Halving searches over a sorted slice.
//!
//! Both functions require `books` to be sorted by [`Record`]'s [`Ord`]
//! implementation (see [`crate::record`]). Bounds are kept as a half-open
//! range `[low, high)`, so narrowing to the lower half never decrements
//! below zero and the search ends when the range is empty.
//!
//! The exact triple is checked at each midpoint before narrowing. Narrowing
//! compares the midpoint against the query with the full total order, not
//! the identifier alone, so records that share an identifier but differ in
//! category or language are all reachable.

use crate::record::Record;
use std::cmp::Ordering;

/// Iterative binary search for an exact `(language, category, identifier)`
/// match.
pub fn binary_search(books: &[Record], language: &str, category: &str, identifier: u64) -> bool {
    let mut low = 0;
    let mut high = books.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let book = &books[mid];
        if book.matches(language, category, identifier) {
            return true;
        }
        match book.cmp_fields(identifier, category, language) {
            Ordering::Less => low = mid + 1,
            _ => high = mid,
        }
    }
    false
}

/// Recursive binary search with the same contract as [`binary_search`].
///
/// Recursion depth is logarithmic in `books.len()`.
pub fn recursive_binary_search(
    books: &[Record],
    language: &str,
    category: &str,
    identifier: u64,
) -> bool {
    if books.is_empty() {
        return false;
    }
    search_range(books, language, category, identifier, 0, books.len())
}

fn search_range(
    books: &[Record],
    language: &str,
    category: &str,
    identifier: u64,
    low: usize,
    high: usize,
) -> bool {
    if low >= high {
        return false;
    }
    let mid = low + (high - low) / 2;
    let book = &books[mid];
    if book.matches(language, category, identifier) {
        return true;
    }
    match book.cmp_fields(identifier, category, language) {
        Ordering::Less => search_range(books, language, category, identifier, mid + 1, high),
        _ => search_range(books, language, category, identifier, low, mid),
    }
}
