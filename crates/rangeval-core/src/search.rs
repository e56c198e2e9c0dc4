//! Binary search over sorted value arrays.
//!
//! `slice::binary_search` may land anywhere inside a run of equal values, so
//! the range search here widens the landing point outward until the whole run
//! at each bound is covered. Widening costs O(run length) in the worst case
//! (every value equal) and O(1) amortized on well-distributed data.

use std::ops::Range;

/// Index of the first element `>= value`, or `values.len()` if none.
#[must_use]
pub fn lower_bound(values: &[i64], value: i64) -> usize {
    values.partition_point(|&v| v < value)
}

/// Index of the first element `> value`, or `values.len()` if none.
///
/// Equivalent to `lower_bound(values, value + 1)` without overflowing at
/// `i64::MAX`.
#[must_use]
pub fn upper_bound(values: &[i64], value: i64) -> usize {
    values.partition_point(|&v| v <= value)
}

/// Landing point of a binary search: a matching index or the insertion point.
fn probe(values: &[i64], value: i64) -> usize {
    match values.binary_search(&value) {
        Ok(i) | Err(i) => i,
    }
}

/// Positions of `values` (sorted ascending) holding a value in `[min, max]`.
///
/// Both bounds are inclusive: every duplicate of `min` and of `max` is part of
/// the returned half-open range. Returns an empty range when nothing matches,
/// including when `min > max`.
#[must_use]
pub fn between(values: &[i64], min: i64, max: i64) -> Range<usize> {
    if min > max {
        return 0..0;
    }

    let mut begin = probe(values, min);
    while begin > 0 && values[begin - 1] == min {
        begin -= 1;
    }

    let mut end = begin + probe(&values[begin..], max);
    if end < values.len() && values[end] == max {
        while end + 1 < values.len() && values[end + 1] == max {
            end += 1;
        }
        // landed on max: make the bound exclusive
        end += 1;
    }

    begin..end
}
