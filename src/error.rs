//! Error types for scanning and size parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the filesystem during a scan.
///
/// None of these are fatal to a run: the renderer turns them into
/// diagnostic lines and keeps going.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Error walking through the directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Error reading directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by [`parse_size`](crate::tree::parse_size).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    #[error("Error parsing size: empty size token")]
    Empty,

    #[error("Error parsing size '{token}': unknown unit (expected B, KB, MB, GB or TB)")]
    UnknownUnit { token: String },

    #[error("Error parsing size '{token}': invalid number '{number}'")]
    InvalidNumber { token: String, number: String },
}
