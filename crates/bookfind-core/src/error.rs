//! Error types for bookfind-core.
//!
//! Search operations are total and never fail. Errors only arise at the
//! edges: parsing record lines, reading record files, and parsing a
//! strategy token.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a single record line.
///
/// The loader treats every variant as "skip this line"; they are surfaced
/// for logging and for callers that parse lines one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Line was empty
    #[error("empty line")]
    Empty,
    /// Line bytes were not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    /// Line had fewer than three comma-separated fields
    #[error("missing {expected} field")]
    MissingField {
        /// Name of the first field that could not be found
        expected: &'static str,
    },
    /// Identifier field was not a non-negative integer
    #[error("invalid identifier: {value:?}")]
    InvalidIdentifier {
        /// Raw identifier text
        value: String,
    },
}

/// Errors that can occur while loading a record file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened
    #[error("cannot open file {}", path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading from an opened source failed part way through
    #[error("failed to read line {line}")]
    Read {
        /// 1-based line number that failed
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when a strategy token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy: {0:?} (expected l, b or r)")]
pub struct ParseStrategyError(pub String);
