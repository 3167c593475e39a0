//! Workbook sink trait and the `rust_xlsxwriter` backed writer.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rust_xlsxwriter::Workbook;
use tracing::{debug, info};

use crate::spec::{SpecSheetRef, XlsxIoError};
use crate::util::register_sheet_name;

/// Minimal workbook capability: add named sheets, write numbers, save once.
pub trait WorkbookSink {
    /// Append a worksheet named exactly `name`.
    fn add_sheet(&mut self, name: &str) -> Result<SpecSheetRef, XlsxIoError>;

    /// Write a numeric cell, replacing any earlier value at the same coordinate.
    fn write_number(
        &mut self,
        sheet: SpecSheetRef,
        row: u32,
        col: u16,
        value: f64,
    ) -> Result<(), XlsxIoError>;

    /// Flush the workbook. Idempotent.
    fn close(&mut self) -> Result<(), XlsxIoError>;
}

/// Stateful workbook writer.
///
/// The workbook is buffered in memory until [`WorkbookSink::close`] is called;
/// dropping the writer without closing leaves no file behind.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    set_sheet_names_existing: BTreeSet<String>,
    n_sheets: usize,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path.
    pub fn new(path_file_out: impl Into<PathBuf>) -> Self {
        Self {
            path_file_out: path_file_out.into(),
            workbook: Workbook::new(),
            set_sheet_names_existing: BTreeSet::new(),
            n_sheets: 0,
            if_closed: false,
        }
    }

    fn ensure_open(&self) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::Closed);
        }
        Ok(())
    }
}

impl WorkbookSink for XlsxWriter {
    fn add_sheet(&mut self, name: &str) -> Result<SpecSheetRef, XlsxIoError> {
        self.ensure_open()?;
        register_sheet_name(&mut self.set_sheet_names_existing, name)?;

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(name)?;

        let sheet = SpecSheetRef(self.n_sheets);
        self.n_sheets += 1;
        debug!(sheet = name, index = sheet.index(), "added worksheet");
        Ok(sheet)
    }

    fn write_number(
        &mut self,
        sheet: SpecSheetRef,
        row: u32,
        col: u16,
        value: f64,
    ) -> Result<(), XlsxIoError> {
        self.ensure_open()?;
        if sheet.index() >= self.n_sheets {
            return Err(XlsxIoError::UnknownSheet(sheet.index()));
        }
        self.workbook
            .worksheet_from_index(sheet.index())?
            .write_number(row, col, value)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        info!(
            file = %self.path_file_out.display(),
            sheets = self.n_sheets,
            "saved workbook"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use calamine::{Data, Reader, Xlsx, open_workbook};

    use super::*;

    #[test]
    fn test_writer_round_trip_through_reader() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("plot.xlsx");

        let mut writer = XlsxWriter::new(&path);
        let sheet_a = writer.add_sheet("a.out").unwrap();
        let sheet_b = writer.add_sheet("b.out").unwrap();
        writer.write_number(sheet_a, 1, 1, 0.0).unwrap();
        writer.write_number(sheet_a, 2, 4, 7.5).unwrap();
        writer.write_number(sheet_b, 0, 3, 3.0).unwrap();
        writer.write_number(sheet_b, 0, 3, 9.0).unwrap();
        assert!(!path.exists());
        writer.close().unwrap();
        assert!(path.exists());

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec!["a.out".to_string(), "b.out".to_string()]
        );

        let range_a = workbook.worksheet_range("a.out").unwrap();
        assert_eq!(range_a.get_value((1, 1)), Some(&Data::Float(0.0)));
        assert_eq!(range_a.get_value((2, 4)), Some(&Data::Float(7.5)));

        let range_b = workbook.worksheet_range("b.out").unwrap();
        assert_eq!(range_b.get_value((0, 3)), Some(&Data::Float(9.0)));
    }

    #[test]
    fn test_writer_close_is_idempotent_and_blocks_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let mut writer = XlsxWriter::new(tmp.path().join("plot.xlsx"));
        let sheet = writer.add_sheet("a.out").unwrap();
        writer.close().unwrap();
        writer.close().unwrap();

        assert!(matches!(
            writer.write_number(sheet, 0, 0, 1.0),
            Err(XlsxIoError::Closed)
        ));
        assert!(matches!(writer.add_sheet("b.out"), Err(XlsxIoError::Closed)));
    }

    #[test]
    fn test_writer_rejects_bad_names_and_handles() {
        let tmp = tempfile::tempdir().unwrap();
        let mut writer = XlsxWriter::new(tmp.path().join("plot.xlsx"));
        writer.add_sheet("a.out").unwrap();

        assert!(matches!(
            writer.add_sheet("A.OUT"),
            Err(XlsxIoError::DuplicateSheetName(_))
        ));
        assert!(matches!(
            writer.add_sheet("a/b.out"),
            Err(XlsxIoError::InvalidSheetName { .. })
        ));
        assert!(matches!(
            writer.write_number(SpecSheetRef(5), 0, 0, 1.0),
            Err(XlsxIoError::UnknownSheet(5))
        ));
        writer.close().unwrap();

        let workbook: Xlsx<_> = open_workbook(tmp.path().join("plot.xlsx")).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["a.out".to_string()]);
    }

    #[test]
    fn test_writer_overwrites_existing_output() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("plot.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        let mut writer = XlsxWriter::new(&path);
        writer.add_sheet("fresh.out").unwrap();
        writer.close().unwrap();

        let workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["fresh.out".to_string()]);
    }
}
