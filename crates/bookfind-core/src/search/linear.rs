//! Sequential scan.

use crate::record::Record;

/// Returns true if any record matches the exact `(language, category,
/// identifier)` triple.
///
/// Scans in index order and stops at the first match. The slice does not
/// need to be sorted.
pub fn linear_search(books: &[Record], language: &str, category: &str, identifier: u64) -> bool {
    books
        .iter()
        .any(|book| book.matches(language, category, identifier))
}
