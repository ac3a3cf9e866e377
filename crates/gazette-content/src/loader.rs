//! Dataset loading.

use std::fs;
use std::path::Path;

use crate::model::Dataset;

/// Errors that can occur when loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse a dataset from a JSON document.
pub fn parse_dataset(source: &str) -> Result<Dataset, LoadError> {
    Ok(serde_json::from_str(source)?)
}

/// Read and parse the dataset file at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    parse_dataset(&source)
}
