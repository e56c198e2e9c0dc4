//! Sorted values carrying a permutation back to original rows.

use serde::{Deserialize, Serialize};

use super::{
    check_rows, corrupted, decoded_rows, EvaluatorKind, RangeEvaluator, POSITION_BYTES,
    VALUE_BYTES,
};
use crate::error::{Error, Result};
use crate::{search, MatchSet};

/// Column values sorted ascending, with the original row of each entry.
///
/// Invariants: `sorted_values[i] == column[indexes[i]]`, `sorted_values` is
/// ascending and `indexes` is a permutation of `{0, .., N - 1}`. The order of
/// rows within a run of equal values is unspecified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PermutedIndexRepr")]
pub struct PermutedIndexEvaluator {
    sorted_values: Vec<i64>,
    indexes: Vec<u32>,
}

impl PermutedIndexEvaluator {
    /// Builds the permutation by sorting `(value, row)` pairs by value.
    pub fn new(values: &[i64]) -> Result<Self> {
        check_rows(values.len())?;

        let mut pairs: Vec<(i64, u32)> = values
            .iter()
            .enumerate()
            .map(|(row, &value)| (value, row as u32))
            .collect();
        // ties are only ever compared by value downstream
        pairs.sort_unstable_by_key(|&(value, _)| value);

        let (sorted_values, indexes) = pairs.into_iter().unzip();
        Ok(Self {
            sorted_values,
            indexes,
        })
    }

    /// Values sorted ascending.
    #[must_use]
    pub fn sorted_values(&self) -> &[i64] {
        &self.sorted_values
    }

    /// Original row of each entry of [`Self::sorted_values`].
    #[must_use]
    pub fn indexes(&self) -> &[u32] {
        &self.indexes
    }
}

/// Decoded form, checked before it becomes an evaluator.
#[derive(Deserialize)]
struct PermutedIndexRepr {
    sorted_values: Vec<i64>,
    indexes: Vec<u32>,
}

impl TryFrom<PermutedIndexRepr> for PermutedIndexEvaluator {
    type Error = Error;

    fn try_from(repr: PermutedIndexRepr) -> Result<Self> {
        const WHAT: &str = "permuted index";
        let rows = decoded_rows(WHAT, repr.sorted_values.len())?;
        if repr.indexes.len() != repr.sorted_values.len() {
            return Err(corrupted(WHAT, "indexes and sorted values differ in length"));
        }
        if !repr.sorted_values.is_sorted() {
            return Err(corrupted(WHAT, "values are not sorted"));
        }
        let mut seen = MatchSet::new();
        for &row in &repr.indexes {
            if row >= rows || !seen.insert(row) {
                return Err(corrupted(WHAT, "indexes are not a permutation of the rows"));
            }
        }
        Ok(Self {
            sorted_values: repr.sorted_values,
            indexes: repr.indexes,
        })
    }
}

impl RangeEvaluator for PermutedIndexEvaluator {
    fn between(&self, min: i64, max: i64) -> MatchSet {
        let range = search::between(&self.sorted_values, min, max);
        tracing::trace!(min, max, matches = range.len(), "permuted index");

        let mut result = MatchSet::new();
        for &row in &self.indexes[range] {
            result.insert(row);
        }
        result
    }

    fn serialized_size(&self) -> usize {
        self.sorted_values.len() * VALUE_BYTES + self.indexes.len() * POSITION_BYTES
    }

    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::PermutedIndex
    }
}
