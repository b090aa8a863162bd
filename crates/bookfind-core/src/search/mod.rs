//! Exact-match lookup strategies over a slice of records.
//!
//! Three interchangeable algorithms share one contract: given a slice of
//! [`Record`](crate::record::Record)s and a query triple
//! `(language, category, identifier)`, return whether some record matches
//! all three fields exactly. None of them perform I/O or mutate the slice.
//!
//! # Architecture
//!
//! - `linear`: sequential scan, works on any order
//! - `binary`: iterative and recursive halving, require a sorted slice
//! - `strategy`: [`SearchStrategy`] selects one of the above at runtime
//!
//! # Usage
//!
//! ```
//! use bookfind_core::record::Record;
//! use bookfind_core::search::{binary_search, linear_search, SearchStrategy};
//!
//! let mut books = vec![
//!     Record::new("english", "used", 100),
//!     Record::new("english", "new", 100),
//! ];
//! books.sort_unstable();
//!
//! assert!(linear_search(&books, "english", "used", 100));
//! assert!(binary_search(&books, "english", "used", 100));
//! assert!(!binary_search(&books, "english", "digital", 100));
//!
//! let query = Record::new("english", "new", 100);
//! assert!(SearchStrategy::RecursiveBinary.search(&books, &query));
//! ```
//!
//! # Performance Characteristics
//!
//! - **Linear**: O(n) per query
//! - **Binary / recursive**: O(log n) per query, plus a one-time
//!   O(n log n) sort done by [`Catalog`](crate::catalog::Catalog)

mod binary;
mod linear;
mod strategy;

pub use binary::{binary_search, recursive_binary_search};
pub use linear::linear_search;
pub use strategy::SearchStrategy;
