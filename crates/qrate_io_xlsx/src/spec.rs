//! Shared XLSX models and error types.

use thiserror::Error;

/// Handle to a worksheet added through a [`crate::WorkbookSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpecSheetRef(pub(crate) usize);

impl SpecSheetRef {
    /// Zero-based position of the sheet in the workbook.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fatal workbook errors.
#[derive(Debug, Error)]
pub enum XlsxIoError {
    /// Name violates Excel sheet-name rules.
    #[error("invalid worksheet name {name:?}: {reason}")]
    InvalidSheetName {
        /// Rejected name.
        name: String,
        /// Violated rule.
        reason: String,
    },
    /// Name collides (case-insensitively) with an existing sheet.
    #[error("duplicate worksheet name {0:?}")]
    DuplicateSheetName(String),
    /// Row index outside `0..N_NROWS_EXCEL_MAX`.
    #[error("row index out of range: {0}")]
    RowOutOfRange(i64),
    /// Column index outside `0..N_NCOLS_EXCEL_MAX`.
    #[error("column index out of range: {0}")]
    ColumnOutOfRange(i64),
    /// Sheet handle not issued by this sink.
    #[error("unknown worksheet index: {0}")]
    UnknownSheet(usize),
    /// Write attempted after `close()`.
    #[error("cannot write after close()")]
    Closed,
    /// Error reported by `rust_xlsxwriter`.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
