//! Error types for `rangeval`.
//!
//! Queries never fail: all evaluator operations are pure in-memory computations.
//! Errors only arise while preparing inputs (column construction, data
//! generation, configuration) or while persisting an evaluator.

use thiserror::Error;

/// Result type alias for `rangeval` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `rangeval` operations.
///
/// Error codes follow the pattern `RANGEVAL-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// Column has more rows than a `u32` row position can address (RANGEVAL-001).
    #[error("[RANGEVAL-001] Column has {rows} rows, at most {max} are supported")]
    ColumnTooLarge {
        /// Number of rows supplied.
        rows: usize,
        /// Maximum number of rows supported.
        max: usize,
    },

    /// Distribution descriptor could not be parsed (RANGEVAL-002).
    #[error("[RANGEVAL-002] Invalid distribution '{0}'")]
    InvalidDistribution(String),

    /// Query bounds are unusable (RANGEVAL-003).
    #[error("[RANGEVAL-003] Invalid query: {0}")]
    InvalidQuery(String),

    /// Evaluator name not recognised (RANGEVAL-004).
    #[error("[RANGEVAL-004] Unknown evaluator '{0}'")]
    UnknownEvaluator(String),

    /// Configuration error (RANGEVAL-005).
    #[error("[RANGEVAL-005] Configuration error: {0}")]
    Config(String),

    /// IO error (RANGEVAL-006).
    #[error("[RANGEVAL-006] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (RANGEVAL-007).
    #[error("[RANGEVAL-007] Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns the error code (e.g., "RANGEVAL-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ColumnTooLarge { .. } => "RANGEVAL-001",
            Self::InvalidDistribution(_) => "RANGEVAL-002",
            Self::InvalidQuery(_) => "RANGEVAL-003",
            Self::UnknownEvaluator(_) => "RANGEVAL-004",
            Self::Config(_) => "RANGEVAL-005",
            Self::Io(_) => "RANGEVAL-006",
            Self::Serialization(_) => "RANGEVAL-007",
        }
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
