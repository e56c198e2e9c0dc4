//! Run-compressed distinct-value intervals over a sorted column.
//!
//! A sorted column of `N` rows with `K` distinct values is stored as `K`
//! `(value, run start)` pairs. Because the column is sorted, the rows holding
//! any interval of distinct values form a single contiguous position range, so
//! a query is two binary searches over `K` entries and one range insert.

use serde::{Deserialize, Serialize};

use super::{
    check_rows, corrupted, is_strictly_increasing, runs, EvaluatorKind, RangeEvaluator,
    POSITION_BYTES, VALUE_BYTES,
};
use crate::error::{Error, Result};
use crate::{search, MatchSet};

/// Distinct values of a sorted column with the first position of each run.
///
/// Invariants: `unique_values` is strictly increasing, `run_starts` is
/// strictly increasing and index-aligned with it, and value `unique_values[i]`
/// occupies positions `[run_starts[i], run_starts[i + 1])`, the last run
/// extending to `rows`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct IntervalEvaluator {
    unique_values: Vec<i64>,
    run_starts: Vec<u32>,
    rows: u32,
}

impl IntervalEvaluator {
    /// Builds the intervals in one pass over `sorted`, which must be sorted
    /// ascending.
    ///
    /// Unsorted input is a caller error; it is only checked in debug builds.
    pub fn new(sorted: &[i64]) -> Result<Self> {
        let rows = check_rows(sorted.len())?;
        debug_assert!(sorted.is_sorted(), "IntervalEvaluator requires sorted input");
        let (unique_values, run_starts) = runs(sorted);
        Ok(Self {
            unique_values,
            run_starts,
            rows,
        })
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.unique_values.len()
    }

    /// Distinct values, ascending.
    #[must_use]
    pub fn unique_values(&self) -> &[i64] {
        &self.unique_values
    }

    /// First position of the run of each distinct value.
    #[must_use]
    pub fn run_starts(&self) -> &[u32] {
        &self.run_starts
    }

    /// Start of run `i`, or the row count for the one-past-last run.
    fn run_start(&self, i: usize) -> u32 {
        self.run_starts.get(i).copied().unwrap_or(self.rows)
    }
}

/// Decoded form, checked before it becomes an evaluator.
#[derive(Deserialize)]
struct IntervalRepr {
    unique_values: Vec<i64>,
    run_starts: Vec<u32>,
    rows: u32,
}

impl TryFrom<IntervalRepr> for IntervalEvaluator {
    type Error = Error;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        const WHAT: &str = "intervals";
        if repr.run_starts.len() != repr.unique_values.len() {
            return Err(corrupted(WHAT, "run starts and distinct values differ in length"));
        }
        if !is_strictly_increasing(&repr.unique_values)
            || !is_strictly_increasing(&repr.run_starts)
        {
            return Err(corrupted(WHAT, "runs are not strictly increasing"));
        }
        match (repr.run_starts.first(), repr.run_starts.last()) {
            (None, None) if repr.rows != 0 => {
                return Err(corrupted(WHAT, "rows without any run"));
            }
            (Some(&first), Some(&last)) if first != 0 || last >= repr.rows => {
                return Err(corrupted(WHAT, "runs do not cover the rows"));
            }
            _ => {}
        }
        Ok(Self {
            unique_values: repr.unique_values,
            run_starts: repr.run_starts,
            rows: repr.rows,
        })
    }
}

impl RangeEvaluator for IntervalEvaluator {
    fn between(&self, min: i64, max: i64) -> MatchSet {
        let mut result = MatchSet::new();
        if min > max {
            return result;
        }
        // distinct values need no widening
        let start = search::lower_bound(&self.unique_values, min);
        let end = start + search::upper_bound(&self.unique_values[start..], max);
        tracing::trace!(min, max, start, end, "intervals");
        if start < end {
            result.insert_range(self.run_start(start)..self.run_start(end));
        }
        result
    }

    fn serialized_size(&self) -> usize {
        self.unique_values.len() * VALUE_BYTES + self.run_starts.len() * POSITION_BYTES
    }

    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::Intervals
    }
}
