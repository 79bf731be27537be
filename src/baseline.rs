//! Known-results loader.

use crate::error::{HarnessError, Result};
use crate::models::baseline::KnownResults;
use std::fs;
use std::path::Path;

/// Load the known results from a JSON file.
///
/// The file holds a single `warningsAndErrors` object mapping finding names
/// to expected counts. A missing or `null` key is read as an empty mapping.
pub fn load_baseline(path: &Path) -> Result<KnownResults> {
    let data = fs::read_to_string(path).map_err(|source| HarnessError::BaselineRead {
        path: path.to_path_buf(),
        source,
    })?;
    let known: KnownResults =
        serde_json::from_str(&data).map_err(|source| HarnessError::BaselineParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        entries = known.warnings_and_errors.len(),
        "loaded known results"
    );
    Ok(known)
}
