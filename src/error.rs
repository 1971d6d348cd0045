//! Error types for loading homeowner records.
//!
//! Extraction itself cannot fail; everything here comes from reading the
//! CSV source.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Path is empty or does not point at an existing file.
    #[error("File path not set or invalid path provided: '{}'", .0.display())]
    InvalidInput(PathBuf),

    /// Header row lacks the name column.
    #[error("Column '{column}' not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// CSV reading failed.
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
