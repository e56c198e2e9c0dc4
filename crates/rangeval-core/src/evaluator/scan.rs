//! Linear scan baseline.

use serde::{Deserialize, Serialize};

use super::{check_rows, decoded_rows, EvaluatorKind, RangeEvaluator};
use crate::error::{Error, Result};
use crate::MatchSet;

/// Visits every row on every query. Used as the reference for the indexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ScanRepr")]
pub struct ScanEvaluator {
    values: Vec<i64>,
}

impl ScanEvaluator {
    /// Creates a scan over `values` in row order.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        check_rows(values.len())?;
        Ok(Self { values })
    }
}

#[derive(Deserialize)]
struct ScanRepr {
    values: Vec<i64>,
}

impl TryFrom<ScanRepr> for ScanEvaluator {
    type Error = Error;

    fn try_from(repr: ScanRepr) -> Result<Self> {
        decoded_rows("scan", repr.values.len())?;
        Ok(Self {
            values: repr.values,
        })
    }
}

impl RangeEvaluator for ScanEvaluator {
    fn between(&self, min: i64, max: i64) -> MatchSet {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v >= min && v <= max)
            .map(|(row, _)| row as u32)
            .collect()
    }

    fn serialized_size(&self) -> usize {
        0
    }

    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::Scan
    }
}
