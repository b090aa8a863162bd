//! Benchmark run implementation.
//!
//! Loads the catalog and request files and runs every request through the
//! chosen strategy while timing only that phase. Writing the match count is
//! a separate step so the caller can report the timing first.

use crate::output::RunReport;
use crate::timer::Stopwatch;
use anyhow::{Context, Result};
use bookfind_core::{load_records, Catalog, SearchStrategy};
use std::path::Path;
use tracing::info;

/// Where the strategy comes from: fixed up front, or asked for once the
/// catalog is loaded.
pub enum StrategySource<'a> {
    Fixed(SearchStrategy),
    Prompt(&'a mut dyn FnMut() -> Result<SearchStrategy>),
}

/// Options for a single run.
pub struct RunOptions<'a> {
    pub books: &'a Path,
    pub requests: &'a Path,
    pub parallel: bool,
}

/// Performs one benchmark run.
///
/// This function:
/// 1. Loads and sorts the catalog
/// 2. Loads the requests
/// 3. Resolves the strategy (prompting if needed)
/// 4. Times the lookups
///
/// The result file is not touched; see [`write_result`]. Any input file that
/// cannot be opened aborts the run with an error.
pub fn execute_run(options: &RunOptions<'_>, strategy: StrategySource<'_>) -> Result<RunReport> {
    // 1. Catalog
    let books = load_records(options.books)
        .with_context(|| format!("Failed to load catalog: {}", options.books.display()))?;
    let records_skipped = books.skipped;
    let catalog = Catalog::new(books.records);
    info!("Catalog ready with {} records", catalog.len());

    // 2. Requests
    let requests = load_records(options.requests)
        .with_context(|| format!("Failed to load requests: {}", options.requests.display()))?;

    // 3. Strategy
    let strategy = match strategy {
        StrategySource::Fixed(strategy) => strategy,
        StrategySource::Prompt(ask) => ask()?,
    };

    // 4. Query phase
    info!(
        "Searching {} requests with {} search",
        requests.records.len(),
        strategy
    );
    let stopwatch = Stopwatch::start();
    let matches = count(&catalog, &requests.records, strategy, options.parallel);
    let elapsed_us = stopwatch.elapsed_micros();

    Ok(RunReport {
        strategy,
        records: catalog.len(),
        records_skipped,
        queries: requests.records.len(),
        queries_skipped: requests.skipped,
        matches,
        elapsed_us,
    })
}

/// Writes the match count as the only line of the result file.
pub fn write_result(path: &Path, matches: usize) -> Result<()> {
    std::fs::write(path, format!("{}\n", matches))
        .with_context(|| format!("Cannot open output file {}", path.display()))?;
    info!("Wrote result to {}", path.display());
    Ok(())
}

#[cfg(feature = "parallel")]
fn count(
    catalog: &Catalog,
    queries: &[bookfind_core::Query],
    strategy: SearchStrategy,
    parallel: bool,
) -> usize {
    if parallel {
        catalog.count_matches_parallel(queries, strategy)
    } else {
        catalog.count_matches(queries, strategy)
    }
}

#[cfg(not(feature = "parallel"))]
fn count(
    catalog: &Catalog,
    queries: &[bookfind_core::Query],
    strategy: SearchStrategy,
    parallel: bool,
) -> usize {
    if parallel {
        tracing::warn!("Built without the parallel feature, searching sequentially");
    }
    catalog.count_matches(queries, strategy)
}
