//! # Bookfind Core
//!
//! Platform-independent library for loading a book catalog and answering
//! exact-match lookups with interchangeable search strategies.
//!
//! This crate holds the algorithms and types used by the `bookfind`
//! benchmark, kept separate so they can be tested and benchmarked without
//! the command-line front end.
//!
//! ## Modules
//!
//! - [`record`] - Book record type and the ordering policy
//! - [`search`] - Linear, iterative binary and recursive binary search
//! - [`catalog`] - Sorted collection and the batch lookup driver
//! - [`loader`] - `identifier,language,category` line parsing
//! - [`config`] - Format and ordering constants
//! - [`error`] - Error types for parsing and loading

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod search;

pub use catalog::{run, Catalog};
pub use error::{LoadError, ParseError, ParseStrategyError};
pub use loader::{load_records, parse_line, parse_records, LoadOutcome};
pub use record::{Query, Record};
pub use search::SearchStrategy;
