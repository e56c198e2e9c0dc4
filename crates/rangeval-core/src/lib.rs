//! # `rangeval` Core
//!
//! Build-once, query-many range predicate evaluators over a fixed integer column.
//!
//! Every evaluator answers the same question: given a column of `N` signed
//! 64-bit values and a closed interval `[min, max]`, which row positions hold a
//! value inside the interval? The answer is a [`MatchSet`] (a Roaring bitmap of
//! row positions). The strategies differ only in what they build up front:
//!
//! | Strategy | Build | Extra memory | Query |
//! |----------|-------|--------------|-------|
//! | [`ScanEvaluator`] | O(1) | none | O(N) |
//! | [`BinarySearchEvaluator`] | O(1) (input pre-sorted) | none | O(log N) |
//! | [`IntervalEvaluator`] | O(N) (input pre-sorted) | 12 bytes per distinct value | O(log K) |
//! | [`InvertedIndexEvaluator`] | O(N) | one bitmap per distinct value | O(K in range + matches) |
//! | [`PermutedIndexEvaluator`] | O(N log N) | 12 bytes per row | O(log N + matches) |
//!
//! ## Quick Start
//!
//! ```rust
//! use rangeval_core::{Column, EvaluatorKind, RangeEvaluator};
//!
//! let column = Column::new(vec![5, 1, 5, 3, 1, 5])?;
//! let index = EvaluatorKind::InvertedIndex.build(&column)?;
//!
//! let matches = index.between(1, 3);
//! assert_eq!(matches.iter().collect::<Vec<_>>(), vec![1, 3, 4]);
//! # Ok::<(), rangeval_core::Error>(())
//! ```
//!
//! All evaluators are immutable once built and are `Send + Sync`, so a single
//! instance can serve concurrent queries without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // row positions are bounded by Column::new
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod column;
pub mod config;
pub mod distribution;
#[cfg(test)]
mod distribution_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod evaluator;
pub mod persistence;
pub mod query;
pub mod search;

pub use column::Column;
pub use config::{ConfigError, RangevalConfig};
pub use distribution::Distribution;
pub use error::{Error, Result};
pub use evaluator::{
    BinarySearchEvaluator, EvaluatorKind, IntervalEvaluator, InvertedIndexEvaluator,
    PermutedIndexEvaluator, RangeEvaluator, ScanEvaluator,
};
pub use query::RangeQuery;

/// Set of row positions returned by every evaluator.
///
/// Positions are ascending and unique. A fresh set is returned per query.
pub type MatchSet = roaring::RoaringBitmap;
