//! `qrate_io_xlsx` v1:
//! Workbook sink for sparse numeric worksheets.
//!
//! Modules:
//! - `conf`   : Excel limits
//! - `spec`   : sheet handles and errors
//! - `util`   : pure validation/cast helpers
//! - `writer` : sink trait and the `rust_xlsxwriter` backed writer
//! - `grid`   : in-memory sink
pub mod conf;
pub mod grid;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
pub use grid::GridWorkbook;
pub use spec::{SpecSheetRef, XlsxIoError};
pub use util::{cast_col_num, cast_row_num, validate_sheet_name};
pub use writer::{WorkbookSink, XlsxWriter};
