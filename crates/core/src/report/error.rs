//! Error types for the report module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create or write the report file.
    #[error("Failed to write report to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the report.
    #[error("Failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}
