//! Output formatting for a benchmark run.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use bookfind_core::SearchStrategy;
use serde::Serialize;

/// Summary of one run, printed to stdout after the query phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub strategy: SearchStrategy,
    /// Records in the catalog after loading
    pub records: usize,
    /// Catalog lines that could not be parsed
    pub records_skipped: usize,
    /// Requests looked up
    pub queries: usize,
    /// Request lines that could not be parsed
    pub queries_skipped: usize,
    /// Requests that matched at least one record
    pub matches: usize,
    /// Time spent in the query phase only
    pub elapsed_us: f64,
}

/// Formats the report as JSON.
pub fn format_json(report: &RunReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the report for human-readable terminal output.
pub fn format_human(report: &RunReport) -> String {
    format!(
        "\n\nCPU time: {} microseconds\n{} of {} request{} found among {} record{} ({} search)",
        report.elapsed_us,
        report.matches,
        report.queries,
        plural(report.queries),
        report.records,
        plural(report.records),
        report.strategy,
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
