//! Binary search directly over a sorted column.

use serde::{Deserialize, Serialize};

use super::{check_rows, corrupted, decoded_rows, EvaluatorKind, RangeEvaluator};
use crate::error::{Error, Result};
use crate::{search, MatchSet};

/// Answers range queries by binary search over a column that is itself sorted.
///
/// No auxiliary structure is built: the matching positions are always one
/// contiguous run of the sorted array. Positions are positions in that array,
/// so callers needing original row identity must physically sort the column
/// first (or use [`super::PermutedIndexEvaluator`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BinarySearchRepr")]
pub struct BinarySearchEvaluator {
    values: Vec<i64>,
}

impl BinarySearchEvaluator {
    /// Creates an evaluator over `values`, which must be sorted ascending.
    ///
    /// Unsorted input is a caller error and yields undefined results; it is
    /// only checked in debug builds.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        check_rows(values.len())?;
        debug_assert!(values.is_sorted(), "BinarySearchEvaluator requires sorted input");
        Ok(Self { values })
    }

    /// The sorted column.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

#[derive(Deserialize)]
struct BinarySearchRepr {
    values: Vec<i64>,
}

impl TryFrom<BinarySearchRepr> for BinarySearchEvaluator {
    type Error = Error;

    fn try_from(repr: BinarySearchRepr) -> Result<Self> {
        decoded_rows("binary search", repr.values.len())?;
        if !repr.values.is_sorted() {
            return Err(corrupted("binary search", "values are not sorted"));
        }
        Ok(Self {
            values: repr.values,
        })
    }
}

impl RangeEvaluator for BinarySearchEvaluator {
    fn between(&self, min: i64, max: i64) -> MatchSet {
        let range = search::between(&self.values, min, max);
        tracing::trace!(min, max, begin = range.start, end = range.end, "binary search");
        let mut result = MatchSet::new();
        result.insert_range(range.start as u32..range.end as u32);
        result
    }

    fn serialized_size(&self) -> usize {
        0
    }

    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::BinarySearch
    }
}
