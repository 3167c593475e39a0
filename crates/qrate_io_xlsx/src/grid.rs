//! In-memory workbook sink.

use std::collections::{BTreeMap, BTreeSet};

use crate::spec::{SpecSheetRef, XlsxIoError};
use crate::util::register_sheet_name;
use crate::writer::WorkbookSink;

/// Sparse numeric grid keyed by `(row, col)`.
pub type TypeSheetGrid = BTreeMap<(u32, u16), f64>;

/// Workbook kept entirely in memory.
///
/// Applies the same naming rules as [`crate::XlsxWriter`], which makes it a
/// drop-in sink for inspecting what a run would write.
#[derive(Debug, Default, Clone)]
pub struct GridWorkbook {
    l_sheets: Vec<(String, TypeSheetGrid)>,
    set_sheet_names_existing: BTreeSet<String>,
    if_closed: bool,
}

impl GridWorkbook {
    /// Empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet names in insertion order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.l_sheets.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Cells of the sheet called `name`.
    pub fn sheet(&self, name: &str) -> Option<&TypeSheetGrid> {
        self.l_sheets
            .iter()
            .find(|(sheet_name, _)| sheet_name == name)
            .map(|(_, grid)| grid)
    }

    /// Value at `(row, col)` in sheet `name`.
    pub fn cell(&self, name: &str, row: u32, col: u16) -> Option<f64> {
        self.sheet(name)?.get(&(row, col)).copied()
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.if_closed
    }
}

impl WorkbookSink for GridWorkbook {
    fn add_sheet(&mut self, name: &str) -> Result<SpecSheetRef, XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::Closed);
        }
        register_sheet_name(&mut self.set_sheet_names_existing, name)?;
        self.l_sheets.push((name.to_string(), TypeSheetGrid::new()));
        Ok(SpecSheetRef(self.l_sheets.len() - 1))
    }

    fn write_number(
        &mut self,
        sheet: SpecSheetRef,
        row: u32,
        col: u16,
        value: f64,
    ) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::Closed);
        }
        let (_, grid) = self
            .l_sheets
            .get_mut(sheet.index())
            .ok_or(XlsxIoError::UnknownSheet(sheet.index()))?;
        grid.insert((row, col), value);
        Ok(())
    }

    fn close(&mut self) -> Result<(), XlsxIoError> {
        self.if_closed = true;
        Ok(())
    }
}
