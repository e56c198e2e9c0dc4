//! Immutable integer column shared by all evaluators.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of rows: positions must fit in a `u32`.
pub const MAX_ROWS: usize = u32::MAX as usize;

/// Fixed sequence of values indexed by row position, plus a sorted copy.
///
/// The sorted copy is built once at construction and feeds the strategies that
/// need ordered input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColumnRepr")]
pub struct Column {
    values: Vec<i64>,
    sorted: Vec<i64>,
}

impl Column {
    /// Creates a column from raw values in row order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnTooLarge`] if the column has more rows than a
    /// `u32` row position can address.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.len() > MAX_ROWS {
            return Err(Error::ColumnTooLarge {
                rows: values.len(),
                max: MAX_ROWS,
            });
        }
        let sorted = sorted_copy(&values);
        Ok(Self { values, sorted })
    }

    /// Values in original row order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Values sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> &[i64] {
        &self.sorted
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, `None` for an empty column.
    #[must_use]
    pub fn min(&self) -> Option<i64> {
        self.sorted.first().copied()
    }

    /// Largest value, `None` for an empty column.
    #[must_use]
    pub fn max(&self) -> Option<i64> {
        self.sorted.last().copied()
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        if self.sorted.is_empty() {
            return 0;
        }
        1 + self.sorted.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Value at quantile `q` (clamped to `[0, 1]`) of the sorted column.
    #[must_use]
    pub fn quantile(&self, q: f64) -> Option<i64> {
        if self.sorted.is_empty() {
            return None;
        }
        let q = q.clamp(0.0, 1.0);
        #[allow(clippy::cast_sign_loss)]
        let idx = ((self.sorted.len() as f64) * q) as usize;
        Some(self.sorted[idx.min(self.sorted.len() - 1)])
    }
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Decoded form, checked before it becomes a column.
#[derive(Deserialize)]
struct ColumnRepr {
    values: Vec<i64>,
    sorted: Vec<i64>,
}

impl TryFrom<ColumnRepr> for Column {
    type Error = Error;

    fn try_from(repr: ColumnRepr) -> Result<Self> {
        if repr.values.len() > MAX_ROWS {
            return Err(Error::Serialization(format!(
                "corrupted column: {} rows exceed {MAX_ROWS}",
                repr.values.len()
            )));
        }
        if repr.sorted != sorted_copy(&repr.values) {
            return Err(Error::Serialization(
                "corrupted column: sorted copy does not match values".to_string(),
            ));
        }
        Ok(Self {
            values: repr.values,
            sorted: repr.sorted,
        })
    }
}
