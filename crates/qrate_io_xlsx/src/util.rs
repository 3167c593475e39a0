//! Stateless helpers used by the workbook sinks.

use std::collections::BTreeSet;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, SHEET_NAME_RESERVED,
    TUP_EXCEL_ILLEGAL,
};
use crate::spec::XlsxIoError;

/// Check `name` against Excel sheet-name rules without altering it.
pub fn validate_sheet_name(name: &str) -> Result<(), XlsxIoError> {
    let invalid = |reason: String| XlsxIoError::InvalidSheetName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name is blank".to_string()));
    }
    let n_len = name.chars().count();
    if n_len > N_LEN_EXCEL_SHEET_NAME_MAX {
        return Err(invalid(format!(
            "length {n_len} exceeds {N_LEN_EXCEL_SHEET_NAME_MAX} characters"
        )));
    }
    if let Some(c_illegal) = name.chars().find(|c| TUP_EXCEL_ILLEGAL.contains(c)) {
        return Err(invalid(format!("contains illegal character {c_illegal:?}")));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(invalid("begins or ends with an apostrophe".to_string()));
    }
    if name.eq_ignore_ascii_case(SHEET_NAME_RESERVED) {
        return Err(invalid(format!("{SHEET_NAME_RESERVED:?} is reserved")));
    }
    Ok(())
}

/// Validate `name` and reserve it in `set_names_lower`.
///
/// Excel compares sheet names case-insensitively, so the set holds lowercase keys.
pub(crate) fn register_sheet_name(
    set_names_lower: &mut BTreeSet<String>,
    name: &str,
) -> Result<(), XlsxIoError> {
    validate_sheet_name(name)?;
    if !set_names_lower.insert(name.to_lowercase()) {
        return Err(XlsxIoError::DuplicateSheetName(name.to_string()));
    }
    Ok(())
}

/// Narrow a parsed row index to the worksheet row type.
pub fn cast_row_num(value: i64) -> Result<u32, XlsxIoError> {
    usize::try_from(value)
        .ok()
        .filter(|n| *n < N_NROWS_EXCEL_MAX)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(XlsxIoError::RowOutOfRange(value))
}

/// Narrow a parsed column index to the worksheet column type.
pub fn cast_col_num(value: i64) -> Result<u16, XlsxIoError> {
    usize::try_from(value)
        .ok()
        .filter(|n| *n < N_NCOLS_EXCEL_MAX)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or(XlsxIoError::ColumnOutOfRange(value))
}
