use std::path::PathBuf;

use thiserror::Error;

/// Failure to load an alternate vocabulary dataset.
///
/// Game logic itself never fails; only dataset loading reports errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("entry {0} has an empty source or target text")]
    EmptyText(String),

    #[error("dataset contains no entries")]
    Empty,
}
