//! Range evaluator strategies.
//!
//! Every strategy implements [`RangeEvaluator`]. They are independent of each
//! other and depend only on the column they were built from.

mod binary_search;
mod intervals;
mod inverted_index;
mod permuted_index;
mod scan;

#[cfg(test)]
mod inverted_index_tests;

pub use binary_search::BinarySearchEvaluator;
pub use intervals::IntervalEvaluator;
pub use inverted_index::InvertedIndexEvaluator;
pub use permuted_index::PermutedIndexEvaluator;
pub use scan::ScanEvaluator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::{Error, Result};
use crate::MatchSet;

/// Bytes used per stored value.
pub(crate) const VALUE_BYTES: usize = std::mem::size_of::<i64>();
/// Bytes used per stored row position or offset.
pub(crate) const POSITION_BYTES: usize = std::mem::size_of::<u32>();

/// A build-once, query-many range predicate over one column.
///
/// Implementations are immutable after construction; `between` never mutates
/// internal state and returns a fresh [`MatchSet`] per call.
pub trait RangeEvaluator: Send + Sync + fmt::Debug {
    /// Returns every row position `p` with `min <= column[p] <= max`.
    ///
    /// Returns an empty set when nothing qualifies or when `min > max`.
    fn between(&self, min: i64, max: i64) -> MatchSet;

    /// Footprint of the auxiliary structure in bytes.
    ///
    /// Zero for strategies that keep nothing beyond the raw column.
    fn serialized_size(&self) -> usize;

    /// Strategy implemented by this evaluator.
    fn kind(&self) -> EvaluatorKind;
}

/// Available evaluation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Linear scan over every row.
    Scan,
    /// Binary search over a physically sorted column.
    BinarySearch,
    /// Distinct values paired with the start of their run in a sorted column.
    Intervals,
    /// One bitmap of row positions per distinct value.
    InvertedIndex,
    /// Sorted values with a permutation back to original rows.
    PermutedIndex,
}

impl EvaluatorKind {
    /// All strategies, baseline first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Scan,
            Self::BinarySearch,
            Self::Intervals,
            Self::InvertedIndex,
            Self::PermutedIndex,
        ]
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::BinarySearch => "binary_search",
            Self::Intervals => "intervals",
            Self::InvertedIndex => "inverted_index",
            Self::PermutedIndex => "permuted_index",
        }
    }

    /// Returns true if positions refer to original row order.
    ///
    /// `BinarySearch` and `Intervals` require a sorted column, so when built
    /// from a [`Column`] they index its sorted copy and their positions refer
    /// to sorted order.
    #[must_use]
    pub const fn preserves_row_order(&self) -> bool {
        !matches!(self, Self::BinarySearch | Self::Intervals)
    }

    /// Builds this strategy over `column`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column cannot be indexed.
    pub fn build(&self, column: &Column) -> Result<Box<dyn RangeEvaluator>> {
        let evaluator: Box<dyn RangeEvaluator> = match self {
            Self::Scan => Box::new(ScanEvaluator::new(column.values().to_vec())?),
            Self::BinarySearch => Box::new(BinarySearchEvaluator::new(column.sorted().to_vec())?),
            Self::Intervals => Box::new(IntervalEvaluator::new(column.sorted())?),
            Self::InvertedIndex => Box::new(InvertedIndexEvaluator::new(
                column.values(),
                column.sorted(),
            )?),
            Self::PermutedIndex => Box::new(PermutedIndexEvaluator::new(column.values())?),
        };
        tracing::debug!(
            kind = %self,
            rows = column.len(),
            serialized_size = evaluator.serialized_size(),
            "Built range evaluator"
        );
        Ok(evaluator)
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| Error::UnknownEvaluator(s.to_string()))
    }
}

/// Rejects columns whose positions do not fit in a `u32`.
pub(crate) fn check_rows(rows: usize) -> Result<u32> {
    u32::try_from(rows).map_err(|_| Error::ColumnTooLarge {
        rows,
        max: crate::column::MAX_ROWS,
    })
}

/// Error for a decoded payload that breaks an evaluator invariant.
pub(crate) fn corrupted(what: &str, reason: &str) -> Error {
    Error::Serialization(format!("corrupted {what}: {reason}"))
}

/// Row count of a decoded payload, rejecting more rows than `u32` positions.
pub(crate) fn decoded_rows(what: &str, rows: usize) -> Result<u32> {
    u32::try_from(rows).map_err(|_| corrupted(what, "more rows than u32 positions"))
}

pub(crate) fn is_strictly_increasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// Distinct values of a sorted slice, each paired with the start of its run.
pub(crate) fn runs(sorted: &[i64]) -> (Vec<i64>, Vec<u32>) {
    let mut unique = Vec::new();
    let mut run_start = Vec::new();
    for (i, &value) in sorted.iter().enumerate() {
        if unique.last() != Some(&value) {
            unique.push(value);
            run_start.push(i as u32);
        }
    }
    unique.shrink_to_fit();
    run_start.shrink_to_fit();
    (unique, run_start)
}
