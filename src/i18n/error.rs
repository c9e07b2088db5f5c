//! Translation error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    /// Message table file could not be read.
    #[error("failed to read message table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Message table was not a JSON object of strings.
    #[error("failed to parse message table: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}
