//! Run report for one plot pass.

use std::fmt;

/// Counters and warnings for one `plot_dir` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportPlot {
    /// Input files turned into worksheets.
    pub cnt_files: u64,
    /// Lines parsed across all files.
    pub cnt_lines: u64,
    /// Cell writes issued, seed cells and labels included.
    pub cnt_cells: u64,
    /// Cell writes dropped for an out-of-sheet coordinate.
    pub cnt_skipped: u64,
    /// Non-fatal warnings, scan warnings included.
    pub warnings: Vec<String>,
}

impl ReportPlot {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} files={} lines={} cells={} skipped={} warnings={}",
            self.cnt_files,
            self.cnt_lines,
            self.cnt_cells,
            self.cnt_skipped,
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[PLOT]"))
    }
}
