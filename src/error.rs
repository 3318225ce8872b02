//! Error type definitions
//!
//! Every failure category dsmerge can hit. Most of these are degraded to
//! diagnostics at the call site rather than propagated; only output-write
//! failures reach `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while combining datasets
#[derive(Error, Debug)]
pub enum DsMergeError {
    /// A line in a source file is not a valid JSON object
    #[error("invalid JSON on line {line} in {file}: {reason}")]
    MalformedRecord {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// An input file does not exist
    #[error("file not found: {path}")]
    MissingSource { path: PathBuf },

    /// An input file could not be opened or read
    #[error("error loading {file}: {reason}")]
    SourceReadFailure { file: PathBuf, reason: String },

    /// A record could not be serialized back to JSON
    #[error("failed to serialize record: {reason}")]
    SerializeFailure { reason: String },

    /// The output file could not be created or written
    #[error("failed to write {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },
}

/// dsmerge result type alias
pub type Result<T> = std::result::Result<T, DsMergeError>;
