//! Catalog format and ordering constants.
//!
//! These values are shared by the loader, the ordering policy, and the CLI
//! so that every component agrees on the record file layout.
//!
//! # Usage
//!
//! ```
//! use bookfind_core::config::{CATEGORY_RANKS, DEFAULT_RESULT_FILENAME};
//!
//! assert_eq!(CATEGORY_RANKS[0], "new");
//! assert_eq!(DEFAULT_RESULT_FILENAME, "found.dat");
//! ```

// =============================================================================
// Record File Format
// =============================================================================

/// Separator between the fields of a record line.
///
/// Lines are laid out as `identifier,language,category`.
pub const FIELD_SEPARATOR: char = ',';

/// Result file written by the CLI when no path is given.
pub const DEFAULT_RESULT_FILENAME: &str = "found.dat";

// =============================================================================
// Ordering Policy
// =============================================================================

/// Categories with a fixed rank, in ascending order.
///
/// A category's rank is its index in this list. Categories not listed here
/// all share [`UNRANKED_CATEGORY`].
pub const CATEGORY_RANKS: [&str; 3] = ["new", "used", "digital"];

/// Rank shared by every category not in [`CATEGORY_RANKS`].
pub const UNRANKED_CATEGORY: u8 = CATEGORY_RANKS.len() as u8;
