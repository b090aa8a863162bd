//! Book records and the ordering policy used to sort them.
//!
//! A [`Record`] is an immutable catalog entry. Records are ordered by:
//!
//! 1. identifier, ascending
//! 2. category rank: `new` < `used` < `digital` < anything else
//! 3. language, lexicographic
//!
//! Every category outside the ranked set shares one rank, so two records
//! can tie on the policy while still holding different category text. The
//! [`Ord`] implementation breaks that tie on the raw category text, making
//! `Ordering::Equal` coincide with exact equality. A slice sorted by [`Ord`]
//! is therefore also sorted by the policy, and the halving strategies can
//! narrow on it without skipping records that share an identifier.

use crate::config::{CATEGORY_RANKS, UNRANKED_CATEGORY};
use std::cmp::Ordering;
use std::fmt;

/// Lookup target. Same shape as a [`Record`]; compared against, never stored.
pub type Query = Record;

/// Returns the sort rank of a category.
///
/// ```
/// use bookfind_core::record::category_rank;
///
/// assert!(category_rank("new") < category_rank("used"));
/// assert!(category_rank("digital") < category_rank("rare"));
/// assert_eq!(category_rank("rare"), category_rank("vintage"));
/// ```
pub fn category_rank(category: &str) -> u8 {
    CATEGORY_RANKS
        .iter()
        .position(|ranked| *ranked == category)
        .map_or(UNRANKED_CATEGORY, |rank| rank as u8)
}

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    identifier: u64,
    category: String,
    language: String,
}

impl Record {
    /// Creates a record. Argument order follows the lookup signature
    /// `(language, category, identifier)`.
    pub fn new(language: impl Into<String>, category: impl Into<String>, identifier: u64) -> Self {
        Self {
            identifier,
            category: category.into(),
            language: language.into(),
        }
    }

    /// Catalog identifier (ISBN).
    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    /// Condition or format, e.g. `new`, `used`, `digital`.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns true if `self` sorts strictly before `other` under the
    /// ordering policy (identifier, category rank, language).
    pub fn compare(&self, other: &Record) -> bool {
        self.policy_cmp(other.identifier, &other.category, &other.language) == Ordering::Less
    }

    /// Returns true if all three fields are identical.
    ///
    /// This is stricter than ordering-policy equivalence: `rare` and
    /// `vintage` share a rank but are never equal.
    pub fn equals(&self, other: &Record) -> bool {
        self.matches(&other.language, &other.category, other.identifier)
    }

    /// Exact triple match against borrowed query fields.
    #[inline]
    pub fn matches(&self, language: &str, category: &str, identifier: u64) -> bool {
        self.identifier == identifier && self.category == category && self.language == language
    }

    /// Compares this record with borrowed query fields using the total
    /// order of the [`Ord`] implementation.
    #[inline]
    pub fn cmp_fields(&self, identifier: u64, category: &str, language: &str) -> Ordering {
        self.policy_cmp(identifier, category, language)
            .then_with(|| self.category.as_str().cmp(category))
    }

    fn policy_cmp(&self, identifier: u64, category: &str, language: &str) -> Ordering {
        self.identifier
            .cmp(&identifier)
            .then_with(|| category_rank(&self.category).cmp(&category_rank(category)))
            .then_with(|| self.language.as_str().cmp(language))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_fields(other.identifier, &other.category, &other.language)
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN:{}, Language:{}, Type:{}",
            self.identifier, self.language, self.category
        )
    }
}
