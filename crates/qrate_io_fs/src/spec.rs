//! Scan specification models and top-level error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Input file suffix.
pub const SUFFIX_INPUT_DEFAULT: &str = ".out";

////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for [`crate::scan_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecScanOptions {
    /// Directory whose direct children are scanned.
    pub dir: PathBuf,
}

impl Default for SpecScanOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl SpecScanOptions {
    /// Options rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// One matched regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecScanEntry {
    /// Bare file name, used verbatim as a worksheet name downstream.
    pub file_name: String,
    /// Full path for opening the file.
    pub path: PathBuf,
}

/// Fatal scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Listing the directory (or one of its entries) failed.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory being scanned.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// A matching entry name is not valid UTF-8.
    #[error("file name is not valid UTF-8: {}", .0.display())]
    NonUtf8FileName(PathBuf),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
