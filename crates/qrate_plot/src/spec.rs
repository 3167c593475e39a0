//! Plot options, parsed records and error types.

use std::io;
use std::path::PathBuf;

use qrate_io_fs::{ScanError, SpecScanOptions};
use qrate_io_xlsx::XlsxIoError;
use thiserror::Error;

use crate::conf::FILE_OUT_DEFAULT;

////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Options for [`crate::plot_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPlotOptions {
    /// Input discovery options.
    pub scan: SpecScanOptions,
    /// Output workbook path; relative paths resolve against `scan.dir`.
    pub path_file_out: PathBuf,
}

impl Default for SpecPlotOptions {
    fn default() -> Self {
        Self {
            scan: SpecScanOptions::default(),
            path_file_out: PathBuf::from(FILE_OUT_DEFAULT),
        }
    }
}

impl SpecPlotOptions {
    /// Default options rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            scan: SpecScanOptions::in_dir(dir),
            ..Default::default()
        }
    }

    /// Output path with `scan.dir` applied.
    pub fn resolve_file_out(&self) -> PathBuf {
        if self.path_file_out.is_absolute() {
            self.path_file_out.clone()
        } else {
            self.scan.dir.join(&self.path_file_out)
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Records

/// Required tokens of one line, still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecRawFields<'a> {
    /// Row token.
    pub row: &'a str,
    /// Column token.
    pub col: &'a str,
    /// Value token.
    pub value: &'a str,
}

/// One parsed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecDataRecord {
    /// Row index, not yet range-checked.
    pub row: i64,
    /// Column index, not yet range-checked.
    pub col: i64,
    /// Finite cell value.
    pub value: f64,
}

/// What writing one record did to the sheet.
#[derive(Debug, Default)]
pub struct SpecRecordWrite {
    /// Cell writes issued.
    pub cnt_written: u64,
    /// Cell writes dropped because a coordinate lies outside the sheet.
    pub cnt_skipped: u64,
    /// One entry per coordinate that did not fit.
    pub l_skipped: Vec<XlsxIoError>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Why a single line could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineError {
    /// Line has fewer tokens than the highest required position.
    #[error("expected at least {expected} tokens, found {found}")]
    TooFewTokens {
        /// Minimum token count.
        expected: usize,
        /// Tokens present.
        found: usize,
    },
    /// Row or column token is not an integer.
    #[error("token {index} is not an integer: {token:?}")]
    InvalidInteger {
        /// Token position.
        index: usize,
        /// Offending text.
        token: String,
    },
    /// Value token is not a number.
    #[error("token {index} is not a number: {token:?}")]
    InvalidFloat {
        /// Token position.
        index: usize,
        /// Offending text.
        token: String,
    },
    /// Value token is NaN or infinite.
    #[error("value {token:?} is not finite")]
    NonFiniteValue {
        /// Offending text.
        token: String,
    },
}

/// Fatal run errors.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Input discovery failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        /// Input file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// A line did not parse.
    #[error("{file}:{line_no}: {source}")]
    Line {
        /// Input file name.
        file: String,
        /// One-based line number.
        line_no: usize,
        /// Parse failure.
        #[source]
        source: ParseLineError,
    },
    /// A parsed line could not be written.
    #[error("{file}:{line_no}: {source}")]
    Cell {
        /// Input file name.
        file: String,
        /// One-based line number.
        line_no: usize,
        /// Sink failure.
        #[source]
        source: XlsxIoError,
    },
    /// Writing the token trace failed.
    #[error("failed to write trace output: {0}")]
    Trace(#[source] io::Error),
    /// Workbook setup or save failed.
    #[error(transparent)]
    Xlsx(#[from] XlsxIoError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
