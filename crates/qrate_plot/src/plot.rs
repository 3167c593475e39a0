//! Scan, parse and write orchestration.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use qrate_io_fs::{SpecScanEntry, scan_dir};
use qrate_io_xlsx::{
    SpecSheetRef, WorkbookSink, XlsxIoError, XlsxWriter, cast_col_num, cast_row_num,
};
use tracing::{debug, warn};

use crate::conf::{COL_LABEL, COL_SEED, ROW_LABEL, ROW_SEED, VALUE_SEED};
use crate::parse::{select_fields, split_tokens};
use crate::report::ReportPlot;
use crate::spec::{PlotError, SpecDataRecord, SpecPlotOptions, SpecRecordWrite};

/// Build the workbook for every matching file in `options.scan.dir`.
///
/// Tokens of each line are traced to stdout. The workbook is only saved when
/// every file went through; any error leaves no output file.
pub fn plot_dir(options: &SpecPlotOptions) -> Result<ReportPlot, PlotError> {
    let (l_entries, report_scan) = scan_dir(&options.scan)?;

    let mut writer = XlsxWriter::new(options.resolve_file_out());
    let stdout = io::stdout();
    let mut report = plot_entries(&mut writer, &l_entries, &mut stdout.lock())?;
    writer.close()?;

    let mut l_warnings = report_scan.warnings;
    l_warnings.append(&mut report.warnings);
    report.warnings = l_warnings;
    Ok(report)
}

/// Add one sheet per entry to `sink` and fill it. Does not close the sink.
pub fn plot_entries<S, W>(
    sink: &mut S,
    l_entries: &[SpecScanEntry],
    trace: &mut W,
) -> Result<ReportPlot, PlotError>
where
    S: WorkbookSink + ?Sized,
    W: Write + ?Sized,
{
    let mut report = ReportPlot::default();
    for entry in l_entries {
        let file = File::open(&entry.path).map_err(|source| PlotError::ReadInput {
            path: entry.path.clone(),
            source,
        })?;
        let n_lines_before = report.cnt_lines;
        plot_reader(sink, entry, BufReader::new(file), trace, &mut report)?;
        debug!(
            file = entry.file_name.as_str(),
            lines = report.cnt_lines - n_lines_before,
            "processed input file"
        );
    }
    Ok(report)
}

/// Add the sheet for `entry`, seed it, then write every line of `reader`.
///
/// Lines are read as raw bytes; only the selected tokens have to be text.
pub fn plot_reader<S, R, W>(
    sink: &mut S,
    entry: &SpecScanEntry,
    mut reader: R,
    trace: &mut W,
    report: &mut ReportPlot,
) -> Result<SpecSheetRef, PlotError>
where
    S: WorkbookSink + ?Sized,
    R: BufRead,
    W: Write + ?Sized,
{
    let sheet_name = entry.file_name.as_str();
    let sheet = sink.add_sheet(sheet_name)?;
    sink.write_number(sheet, ROW_SEED, COL_SEED, VALUE_SEED)?;
    report.cnt_files += 1;
    report.cnt_cells += 1;

    let mut v_line = Vec::new();
    let mut line_no = 0usize;
    loop {
        v_line.clear();
        let n_read = reader
            .read_until(b'\n', &mut v_line)
            .map_err(|source| PlotError::ReadInput {
                path: entry.path.clone(),
                source,
            })?;
        if n_read == 0 {
            break;
        }
        line_no += 1;
        let line_error = |source| PlotError::Line {
            file: sheet_name.to_string(),
            line_no,
            source,
        };

        let l_tokens = split_tokens(&v_line);
        writeln!(trace, "{l_tokens:?}").map_err(PlotError::Trace)?;
        let fields = select_fields(&l_tokens).map_err(line_error)?;
        writeln!(trace, "{} {} {}", fields.row, fields.col, fields.value)
            .map_err(PlotError::Trace)?;
        let record = fields.parse().map_err(line_error)?;

        let outcome = write_record(sink, sheet, &record).map_err(|source| PlotError::Cell {
            file: sheet_name.to_string(),
            line_no,
            source,
        })?;
        report.cnt_cells += outcome.cnt_written;
        report.cnt_skipped += outcome.cnt_skipped;
        for err in outcome.l_skipped {
            let msg = format!("{sheet_name}:{line_no}: skipped cell: {err}");
            warn!("{msg}");
            report.warnings.push(msg);
        }
        report.cnt_lines += 1;
    }
    Ok(sheet)
}

/// Write the column label, the row label and the value, in that order.
///
/// Coordinates are not clamped. A write whose row or column lies outside the
/// sheet is dropped and recorded in the outcome; the other writes still go
/// through. Only sink failures are returned as errors.
pub fn write_record<S>(
    sink: &mut S,
    sheet: SpecSheetRef,
    record: &SpecDataRecord,
) -> Result<SpecRecordWrite, XlsxIoError>
where
    S: WorkbookSink + ?Sized,
{
    let mut outcome = SpecRecordWrite::default();
    let col = cast_col_num(record.col)
        .map_err(|err| outcome.l_skipped.push(err))
        .ok();
    let row = cast_row_num(record.row)
        .map_err(|err| outcome.l_skipped.push(err))
        .ok();

    let l_writes = [
        col.map(|col| (ROW_LABEL, col, f64::from(col))),
        row.map(|row| (row, COL_LABEL, f64::from(row))),
        row.zip(col).map(|(row, col)| (row, col, record.value)),
    ];
    for write in l_writes {
        match write {
            Some((row, col, value)) => {
                sink.write_number(sheet, row, col, value)?;
                outcome.cnt_written += 1;
            }
            None => outcome.cnt_skipped += 1,
        }
    }
    Ok(outcome)
}
