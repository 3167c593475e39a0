//! Scan report models and mutable report builder.

use std::fmt;

/// Aggregate counters and diagnostics for one `scan_dir` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportScan {
    /// Total directory entries seen.
    pub cnt_scanned: u64,
    /// Entries returned to the caller.
    pub cnt_matched: u64,
    /// Entries whose name matched but were not regular files.
    pub cnt_skipped: u64,
    /// Non-fatal warnings collected during the scan.
    pub warnings: Vec<String>,
}

impl ReportScan {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} matched={} skipped={} warnings={}",
            self.cnt_scanned,
            self.cnt_matched,
            self.cnt_skipped,
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[SCAN]"))
    }
}

/// Mutable accumulator for scan statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportScanBuilder {
    cnt_scanned: u64,
    cnt_matched: u64,
    cnt_skipped: u64,
    warnings: Vec<String>,
}

impl ReportScanBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment matched count by one.
    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    /// Record one skipped entry together with its warning.
    pub fn add_skipped(&mut self, warning: String) {
        self.cnt_skipped += 1;
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportScan {
        ReportScan {
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_skipped: self.cnt_skipped,
            warnings: self.warnings,
        }
    }
}
