//! Closed-interval range queries.

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::{Error, Result};
use crate::evaluator::RangeEvaluator;
use crate::MatchSet;

/// Inclusive value range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    /// Lower bound, inclusive.
    pub min: i64,
    /// Upper bound, inclusive.
    pub max: i64,
}

impl RangeQuery {
    /// Creates a query, rejecting `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidQuery(format!(
                "min {min} is greater than max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Derives a query from two quantiles of the column's sorted values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if the column is empty or `lower > upper`.
    pub fn from_quantiles(column: &Column, lower: f64, upper: f64) -> Result<Self> {
        if lower > upper {
            return Err(Error::InvalidQuery(format!(
                "lower quantile {lower} is greater than upper quantile {upper}"
            )));
        }
        match (column.quantile(lower), column.quantile(upper)) {
            (Some(min), Some(max)) => Self::new(min, max),
            _ => Err(Error::InvalidQuery(
                "cannot derive a range from an empty column".to_string(),
            )),
        }
    }

    /// Returns true if `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Runs this query against `evaluator`.
    #[must_use]
    pub fn evaluate(&self, evaluator: &dyn RangeEvaluator) -> MatchSet {
        evaluator.between(self.min, self.max)
    }
}
