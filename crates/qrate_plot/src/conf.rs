//! Fixed layout constants for the plot workbook.

/// Output workbook name, resolved against the scan directory.
pub const FILE_OUT_DEFAULT: &str = "plot.xlsx";

/// Token position holding the row index.
pub const IDX_TOKEN_ROW: usize = 1;
/// Token position holding the column index.
pub const IDX_TOKEN_COL: usize = 2;
/// Token position holding the cell value.
pub const IDX_TOKEN_VALUE: usize = 4;
/// Minimum tokens per line.
pub const N_TOKENS_MIN: usize = IDX_TOKEN_VALUE + 1;

/// Seed cell written to every sheet before any line.
pub const ROW_SEED: u32 = 1;
/// See [`ROW_SEED`].
pub const COL_SEED: u16 = 1;
/// See [`ROW_SEED`].
pub const VALUE_SEED: f64 = 0.0;

/// Row that carries column labels.
pub const ROW_LABEL: u32 = 0;
/// Column that carries row labels.
pub const COL_LABEL: u16 = 0;
