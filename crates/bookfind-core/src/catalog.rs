//! Sorted record collection and the batch lookup driver.
//!
//! [`Catalog`] owns the one invariant the halving strategies depend on: its
//! records are sorted by [`Record`]'s [`Ord`] implementation from
//! construction onwards and never mutated afterwards.

use crate::record::{Query, Record};
use crate::search::SearchStrategy;
use tracing::{debug, info, instrument};

/// Records sorted once by the ordering policy, then only read.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Sorts `records` and wraps them. Duplicates are kept.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_unstable();
        debug!("Sorted {} records", records.len());
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if some record matches `query` exactly.
    pub fn contains(&self, query: &Query, strategy: SearchStrategy) -> bool {
        strategy.search(&self.records, query)
    }

    /// Counts the queries that match at least one record.
    ///
    /// A query matching several duplicate records counts once.
    pub fn count_matches(&self, queries: &[Query], strategy: SearchStrategy) -> usize {
        queries
            .iter()
            .filter(|query| self.contains(query, strategy))
            .count()
    }

    /// Same as [`count_matches`](Self::count_matches), spreading queries
    /// across the rayon thread pool.
    ///
    /// Records are shared read-only; each worker keeps its own count and the
    /// partial counts are summed at the end.
    #[cfg(feature = "parallel")]
    pub fn count_matches_parallel(&self, queries: &[Query], strategy: SearchStrategy) -> usize {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|query| usize::from(self.contains(query, strategy)))
            .sum()
    }

    fn ensure_sorted(&mut self) {
        if !self.records.is_sorted() {
            debug!("Catalog out of order, re-sorting");
            self.records.sort_unstable();
        }
    }
}

impl From<Vec<Record>> for Catalog {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

/// Sorts `records`, looks up every query with `strategy` and returns the
/// number of queries that matched.
///
/// The sortedness check before an ordering-dependent strategy is redundant
/// after [`Catalog::new`] and does not change the result.
#[instrument(skip_all, fields(strategy = %strategy, records = records.len(), queries = queries.len()))]
pub fn run(records: Vec<Record>, queries: &[Query], strategy: SearchStrategy) -> usize {
    let mut catalog = Catalog::new(records);
    if strategy.requires_sorted() {
        catalog.ensure_sorted();
    }

    let matches = catalog.count_matches(queries, strategy);
    info!("{} of {} queries matched", matches, queries.len());
    matches
}
