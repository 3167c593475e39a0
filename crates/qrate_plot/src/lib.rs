//! `qrate_plot` v1:
//! Collect queue-rate benchmark output files into one workbook.
//!
//! Every `*.out` file in a directory becomes a worksheet named after the file.
//! Each line contributes the value of token 4 at `(token 1, token 2)`, with
//! the indices echoed as labels in row 0 and column 0.
//!
//! Modules:
//! - `conf`   : fixed token positions and sheet layout
//! - `spec`   : options, records and errors
//! - `parse`  : tokenizer and field parser
//! - `plot`   : orchestration over a [`qrate_io_xlsx::WorkbookSink`]
//! - `report` : run report
pub mod conf;
pub mod parse;
pub mod plot;
pub mod report;
pub mod spec;

pub use parse::{parse_line, select_fields, split_tokens};
pub use plot::{plot_dir, plot_entries, plot_reader, write_record};
pub use report::ReportPlot;
pub use spec::{
    ParseLineError, PlotError, SpecDataRecord, SpecPlotOptions, SpecRawFields, SpecRecordWrite,
};
