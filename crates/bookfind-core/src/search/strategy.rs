use super::{binary_search, linear_search, recursive_binary_search};
use crate::error::ParseStrategyError;
use crate::record::{Query, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookup algorithm selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Sequential scan, no ordering precondition
    Linear,
    /// Iterative halving over a sorted slice
    Binary,
    /// Recursive halving over a sorted slice
    RecursiveBinary,
}

impl SearchStrategy {
    /// All strategies, in prompt order.
    pub const ALL: [SearchStrategy; 3] = [Self::Linear, Self::Binary, Self::RecursiveBinary];

    /// Single-letter token accepted at the interactive prompt.
    pub fn token(self) -> &'static str {
        match self {
            Self::Linear => "l",
            Self::Binary => "b",
            Self::RecursiveBinary => "r",
        }
    }

    /// Returns true if the strategy relies on the slice being sorted.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// Looks `query` up in `books` with this strategy.
    #[inline]
    pub fn search(self, books: &[Record], query: &Query) -> bool {
        let (language, category, identifier) =
            (query.language(), query.category(), query.identifier());
        match self {
            Self::Linear => linear_search(books, language, category, identifier),
            Self::Binary => binary_search(books, language, category, identifier),
            Self::RecursiveBinary => {
                recursive_binary_search(books, language, category, identifier)
            }
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
            Self::RecursiveBinary => "recursive binary",
        })
    }
}

impl FromStr for SearchStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" | "linear" => Ok(Self::Linear),
            "b" | "binary" => Ok(Self::Binary),
            "r" | "recursive" | "recursiveBinary" => Ok(Self::RecursiveBinary),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
