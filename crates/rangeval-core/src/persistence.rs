//! Persistence of built evaluators.
//!
//! Evaluators are build-once structures; persisting one avoids rebuilding it.
//! The encoding is `bincode` over the evaluator's serde representation.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Serializes an evaluator (or any index state) to bytes.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

/// Deserializes an evaluator from bytes.
///
/// # Errors
/// Returns an error if the bytes are corrupted or of another type.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(bincode::deserialize(bytes)?)
}

/// Saves an evaluator to a file.
///
/// # Errors
/// Returns an error if serialization or file I/O fails.
pub fn save_to_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let bytes = to_bytes(value)?;
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), "Saved evaluator");
    Ok(())
}

/// Loads an evaluator from a file.
///
/// # Errors
/// Returns an error if file I/O or deserialization fails.
pub fn load_from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)?;
    from_bytes(&bytes)
}
