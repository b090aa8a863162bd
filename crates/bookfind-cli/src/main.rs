//! Bookfind CLI - benchmark exact-match lookups over a book catalog.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for the search method, write the count to found.dat
//! bookfind newbooks.dat requests.dat
//!
//! # Pick the method up front and choose the result file
//! bookfind newbooks.dat requests.dat result.dat --strategy b
//!
//! # Machine-readable report
//! bookfind newbooks.dat requests.dat -s r --json
//! ```

mod config;
mod output;
mod prompt;
mod search;
mod timer;

use anyhow::Result;
use bookfind_core::SearchStrategy;
use clap::Parser;
use search::{RunOptions, StrategySource};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bookfind search benchmark.
///
/// Loads a catalog of `isbn,language,type` records, looks up every request
/// with the chosen search method, reports the time spent searching, and
/// writes the number of requests found to the result file.
#[derive(Parser)]
#[command(name = "bookfind", version, about)]
struct Cli {
    /// Catalog file, one `isbn,language,type` record per line
    books: PathBuf,

    /// Request file, same format as the catalog
    requests: PathBuf,

    /// Result file (default: $BOOKFIND_RESULT_FILE or found.dat)
    result_file: Option<PathBuf>,

    /// Search method: l (linear), b (binary), r (recursive binary).
    /// Prompts on stderr when omitted.
    #[arg(short, long)]
    strategy: Option<SearchStrategy>,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Spread lookups across all cores
    #[arg(long)]
    parallel: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result_file = config::result_path(cli.result_file.as_deref());
    let options = RunOptions {
        books: &cli.books,
        requests: &cli.requests,
        parallel: cli.parallel,
    };

    let mut ask = || prompt::choose_strategy(std::io::stdin().lock(), std::io::stderr());
    let strategy = match cli.strategy {
        Some(strategy) => StrategySource::Fixed(strategy),
        None => StrategySource::Prompt(&mut ask),
    };

    let report = search::execute_run(&options, strategy)?;

    let output = if cli.json {
        output::format_json(&report)
    } else {
        output::format_human(&report)
    };
    println!("{}", output);

    search::write_result(&result_file, report.matches)
}
