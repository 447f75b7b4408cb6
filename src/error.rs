use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a scan before any file is read.
///
/// Per-file read errors never surface here; the scanner logs and skips them.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    InvalidExclude { pattern: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
