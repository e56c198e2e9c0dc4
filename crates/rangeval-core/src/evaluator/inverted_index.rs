//! Inverted index: one posting bitmap per distinct value.
//!
//! Works on unsorted columns. Query cost depends on the number of distinct
//! values inside the range and the number of matching rows, not on `N`, at the
//! price of indexing every row exactly once across all postings.

use roaring::RoaringBitmap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{
    check_rows, corrupted, decoded_rows, is_strictly_increasing, runs, EvaluatorKind,
    RangeEvaluator, POSITION_BYTES, VALUE_BYTES,
};
use crate::error::{Error, Result};
use crate::{search, MatchSet};

/// Distinct values with the set of original rows holding each of them.
///
/// Invariant: the postings partition `{0, .., N - 1}`; row `p` belongs to
/// `postings[i]` exactly when `column[p] == unique_values[i]`.
///
/// The footprint is derived from the postings and recomputed on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InvertedIndexRepr")]
pub struct InvertedIndexEvaluator {
    unique_values: Vec<i64>,
    postings: Vec<RoaringBitmap>,
    #[serde(skip)]
    serialized_size: usize,
}

impl InvertedIndexEvaluator {
    /// Builds the index from a column in row order and a sorted copy of it.
    ///
    /// `sorted` must be the same multiset as `values`, sorted ascending; only
    /// its distinct values are read. A value of `values` absent from `sorted`
    /// is a caller error: debug builds panic, release builds leave that row
    /// out of every posting so [`RangeEvaluator::between`] never returns it.
    /// Use [`Self::from_values`] when no sorted copy is at hand.
    pub fn new(values: &[i64], sorted: &[i64]) -> Result<Self> {
        check_rows(values.len())?;
        debug_assert_eq!(values.len(), sorted.len());
        debug_assert!(sorted.is_sorted(), "InvertedIndexEvaluator requires a sorted copy");

        let (unique_values, _) = runs(sorted);
        let slots: FxHashMap<i64, usize> = unique_values
            .iter()
            .enumerate()
            .map(|(slot, &value)| (value, slot))
            .collect();

        let mut postings = vec![RoaringBitmap::new(); unique_values.len()];
        for (row, value) in values.iter().enumerate() {
            debug_assert!(slots.contains_key(value), "{value} missing from sorted copy");
            if let Some(&slot) = slots.get(value) {
                postings[slot].insert(row as u32);
            }
        }

        Ok(Self::assemble(unique_values, postings))
    }

    fn assemble(unique_values: Vec<i64>, postings: Vec<RoaringBitmap>) -> Self {
        let serialized_size = unique_values.len() * VALUE_BYTES
            + postings.len() * POSITION_BYTES
            + postings.iter().map(RoaringBitmap::serialized_size).sum::<usize>();
        Self {
            unique_values,
            postings,
            serialized_size,
        }
    }

    /// Builds the index from a column in row order, sorting a copy internally.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        Self::new(values, &sorted)
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

    /// Posting bitmaps, index-aligned with [`Self::unique_values`].
    #[must_use]
    pub fn postings(&self) -> &[RoaringBitmap] {
        &self.postings
    }
}

/// Decoded form, checked before it becomes an evaluator.
#[derive(Deserialize)]
struct InvertedIndexRepr {
    unique_values: Vec<i64>,
    postings: Vec<RoaringBitmap>,
}

impl TryFrom<InvertedIndexRepr> for InvertedIndexEvaluator {
    type Error = Error;

    fn try_from(repr: InvertedIndexRepr) -> Result<Self> {
        const WHAT: &str = "inverted index";
        if repr.postings.len() != repr.unique_values.len() {
            return Err(corrupted(WHAT, "postings and distinct values differ in length"));
        }
        if !is_strictly_increasing(&repr.unique_values) {
            return Err(corrupted(WHAT, "distinct values are not strictly increasing"));
        }
        if repr.postings.iter().any(RoaringBitmap::is_empty) {
            return Err(corrupted(WHAT, "empty posting"));
        }

        let total: u64 = repr.postings.iter().map(RoaringBitmap::len).sum();
        let rows = decoded_rows(WHAT, usize::try_from(total).unwrap_or(usize::MAX))?;
        let union = repr
            .postings
            .iter()
            .fold(RoaringBitmap::new(), |mut acc, posting| {
                acc |= posting;
                acc
            });
        // disjoint postings covering exactly 0..rows
        if union.len() != total || (rows > 0 && union.max() != Some(rows - 1)) {
            return Err(corrupted(WHAT, "postings do not partition the rows"));
        }

        Ok(Self::assemble(repr.unique_values, repr.postings))
    }
}

impl RangeEvaluator for InvertedIndexEvaluator {
    fn between(&self, min: i64, max: i64) -> MatchSet {
        if min > max {
            return MatchSet::new();
        }
        let start = search::lower_bound(&self.unique_values, min);
        let end = start + search::upper_bound(&self.unique_values[start..], max);
        tracing::trace!(min, max, postings = end - start, "inverted index");

        self.postings[start..end]
            .iter()
            .fold(MatchSet::new(), |mut acc, posting| {
                acc |= posting;
                acc
            })
    }

    fn serialized_size(&self) -> usize {
        self.serialized_size
    }

    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::InvertedIndex
    }
}
