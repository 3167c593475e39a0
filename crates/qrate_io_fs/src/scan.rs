//! Directory scan for input files.

use std::fs;

use tracing::{debug, info, warn};

use crate::report::{ReportScan, ReportScanBuilder};
use crate::spec::{ScanError, SpecScanEntry, SpecScanOptions};
use crate::util::has_input_suffix;

/// List direct children of `options.dir` whose basename ends with `.out`.
///
/// Entries come back in directory-listing order. Matching entries that are not
/// regular files are skipped and recorded as warnings in the report.
pub fn scan_dir(
    options: &SpecScanOptions,
) -> Result<(Vec<SpecScanEntry>, ReportScan), ScanError> {
    let read_dir_error = |source| ScanError::ReadDir {
        path: options.dir.clone(),
        source,
    };

    let mut report = ReportScanBuilder::default();
    let mut l_entries = Vec::new();

    for entry in fs::read_dir(&options.dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        report.add_scanned();

        let os_name = entry.file_name();
        if !has_input_suffix(&os_name.to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let Some(file_name) = os_name.to_str() else {
            return Err(ScanError::NonUtf8FileName(path));
        };

        if !path.is_file() {
            let msg = format!("skipping {file_name}: not a regular file");
            warn!("{msg}");
            report.add_skipped(msg);
            continue;
        }

        debug!(file = file_name, "matched input file");
        report.add_matched();
        l_entries.push(SpecScanEntry {
            file_name: file_name.to_string(),
            path,
        });
    }

    let report = report.build();
    info!(dir = %options.dir.display(), "{report}");
    Ok((l_entries, report))
}
