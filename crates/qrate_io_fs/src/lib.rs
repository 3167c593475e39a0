//! `qrate_io_fs` v1:
//! Working-directory scan for benchmark output files.
//!
//! Modules:
//! - `scan`   : directory listing and entry filtering
//! - `spec`   : enums/options/errors
//! - `report` : scan-time report model
//! - `util`   : entry name helpers

pub mod report;
pub mod scan;
pub mod spec;
mod util;

pub use report::{ReportScan, ReportScanBuilder};
pub use scan::scan_dir;
pub use spec::{SUFFIX_INPUT_DEFAULT, ScanError, SpecScanEntry, SpecScanOptions};
