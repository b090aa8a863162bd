//! Line-oriented record file loading.
//!
//! Both the catalog file and the request file use the same format, one
//! record per line:
//!
//! ```text
//! identifier,language,category
//! 9780132350884,english,new
//! ```
//!
//! The line is split on its first two commas, so the category is everything
//! after the second comma. Malformed lines (missing field, non-numeric
//! identifier, bytes that are not UTF-8) are skipped and counted, never
//! treated as fatal.

use crate::config::FIELD_SEPARATOR;
use crate::error::{LoadError, ParseError};
use crate::record::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Records read from a source plus the number of lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Successfully parsed records, in file order
    pub records: Vec<Record>,
    /// Lines dropped because they could not be parsed
    pub skipped: usize,
}

/// Parses one `identifier,language,category` line.
///
/// The identifier may be surrounded by whitespace; language and category are
/// taken verbatim.
pub fn parse_line(line: &str) -> Result<Record, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let identifier = fields.next().unwrap_or_default();
    let language = fields.next().ok_or(ParseError::MissingField {
        expected: "language",
    })?;
    let category = fields.next().ok_or(ParseError::MissingField {
        expected: "category",
    })?;

    let identifier = identifier
        .trim()
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidIdentifier {
            value: identifier.to_string(),
        })?;

    Ok(Record::new(language, category, identifier))
}

/// Reads records from any buffered source, skipping malformed lines.
///
/// Lines are split on `\n` as raw bytes with a trailing `\r` removed, so a
/// line that is not valid UTF-8 is skipped like any other malformed line.
/// Only I/O failures abort the read.
#[instrument(skip_all)]
pub fn parse_records<R: BufRead>(reader: R) -> Result<LoadOutcome, LoadError> {
    let mut outcome = LoadOutcome::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line.map_err(|source| LoadError::Read {
            line: index + 1,
            source,
        })?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let parsed = String::from_utf8(line)
            .map_err(|_| ParseError::InvalidUtf8)
            .and_then(|line| parse_line(&line));
        match parsed {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                debug!("Skipping line {}: {}", index + 1, e);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Opens `path` and reads its records.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_records(path: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = parse_records(BufReader::new(file))?;
    info!(
        "Loaded {} records from {} ({} skipped)",
        outcome.records.len(),
        path.display(),
        outcome.skipped
    );
    Ok(outcome)
}
