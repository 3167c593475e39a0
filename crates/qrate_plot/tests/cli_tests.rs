//! End-to-end tests driving the `qrate-plot` binary in a scratch directory.

#![allow(deprecated)] // Command::cargo_bin

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use calamine::{Data, Reader, Xlsx, open_workbook};
use predicates::prelude::*;
use tempfile::TempDir;

fn qrate_plot(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qrate-plot").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read_cells(path: &Path, sheet: &str) -> Vec<((u32, u32), f64)> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    let (n_row0, n_col0) = range.start().unwrap_or((0, 0));
    let mut l_cells: Vec<((u32, u32), f64)> = range
        .cells()
        .filter_map(|(r, c, v)| match v {
            Data::Float(x) => Some(((n_row0 + r as u32, n_col0 + c as u32), *x)),
            Data::Int(x) => Some(((n_row0 + r as u32, n_col0 + c as u32), *x as f64)),
            _ => None,
        })
        .collect();
    l_cells.sort_by(|a, b| a.0.cmp(&b.0));
    l_cells
}

#[test]
fn test_end_to_end_single_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.out"), "0 2 4 6 7.0\n").unwrap();

    qrate_plot(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[\"0\", \"2\", \"4\", \"6\", \"7.0\"]"))
        .stdout(predicate::str::contains("2 4 7.0"));

    let path_out = tmp.path().join("plot.xlsx");
    let workbook: Xlsx<_> = open_workbook(&path_out).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["a.out".to_string()]);

    assert_eq!(
        read_cells(&path_out, "a.out"),
        vec![
            ((0, 4), 4.0),
            ((1, 1), 0.0),
            ((2, 0), 2.0),
            ((2, 4), 7.0),
        ]
    );
}

#[test]
fn test_one_sheet_per_out_file_and_others_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("mpsc_tbb.out"), "DATAOUT 1 1 100 2.5 2.5\n").unwrap();
    fs::write(tmp.path().join("mpsc_boost.out"), "").unwrap();
    fs::write(tmp.path().join("README.txt"), "not data").unwrap();
    fs::create_dir(tmp.path().join("old.out")).unwrap();

    qrate_plot(tmp.path()).assert().success();

    let path_out = tmp.path().join("plot.xlsx");
    let workbook: Xlsx<_> = open_workbook(&path_out).unwrap();
    let mut l_names = workbook.sheet_names();
    l_names.sort();
    assert_eq!(
        l_names,
        vec!["mpsc_boost.out".to_string(), "mpsc_tbb.out".to_string()]
    );
    assert_eq!(read_cells(&path_out, "mpsc_boost.out"), vec![((1, 1), 0.0)]);
    assert_eq!(
        read_cells(&path_out, "mpsc_tbb.out"),
        vec![((0, 1), 1.0), ((1, 0), 1.0), ((1, 1), 2.5)]
    );
}

#[test]
fn test_empty_directory_writes_workbook_without_data_sheets() {
    let tmp = TempDir::new().unwrap();
    qrate_plot(tmp.path()).assert().success();
    assert!(tmp.path().join("plot.xlsx").exists());
}

#[test]
fn test_short_line_aborts_without_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.out"), "0 1 1 0 1.0\n0 2 2\n").unwrap();

    qrate_plot(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.out:2"))
        .stderr(predicate::str::contains("expected at least 5 tokens, found 3"));

    assert!(!tmp.path().join("plot.xlsx").exists());
}

#[test]
fn test_non_numeric_value_aborts() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("v.out"), "x 1 1 y fast\n").unwrap();

    qrate_plot(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
    assert!(!tmp.path().join("plot.xlsx").exists());
}

#[test]
fn test_existing_output_is_replaced() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("plot.xlsx"), b"stale").unwrap();
    fs::write(tmp.path().join("a.out"), "0 3 5 0 2.5\n").unwrap();

    qrate_plot(tmp.path()).assert().success();

    let path_out = tmp.path().join("plot.xlsx");
    let cells = read_cells(&path_out, "a.out");
    assert!(cells.contains(&((3, 5), 2.5)));
}

#[test]
fn test_runs_are_deterministic() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.out"), "0 2 4 6 7.0\n0 3 1 0 -1.5\n").unwrap();
    fs::write(tmp.path().join("b.out"), "z 5 5 z 1e3\n").unwrap();
    let path_out = tmp.path().join("plot.xlsx");

    qrate_plot(tmp.path()).assert().success();
    let first = (read_cells(&path_out, "a.out"), read_cells(&path_out, "b.out"));
    qrate_plot(tmp.path()).assert().success();
    let second = (read_cells(&path_out, "a.out"), read_cells(&path_out, "b.out"));

    assert_eq!(first, second);
}

#[test]
fn test_rejects_arguments() {
    let tmp = TempDir::new().unwrap();
    qrate_plot(tmp.path()).arg("extra").assert().failure().code(2);
}

#[test]
fn test_out_of_sheet_row_is_skipped_and_workbook_saved() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("a.out"),
        "0 2 4 6 7.0\nx 2000000 3 y 1.0\n",
    )
    .unwrap();

    qrate_plot(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("a.out:2: skipped cell"));

    assert_eq!(
        read_cells(&tmp.path().join("plot.xlsx"), "a.out"),
        vec![
            ((0, 3), 3.0),
            ((0, 4), 4.0),
            ((1, 1), 0.0),
            ((2, 0), 2.0),
            ((2, 4), 7.0),
        ]
    );
}

#[test]
fn test_non_utf8_bytes_in_unused_tokens_are_accepted() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.out"), b"DATA\xff 3 5 \xfe 2.5\n").unwrap();

    qrate_plot(tmp.path()).assert().success();

    assert_eq!(
        read_cells(&tmp.path().join("plot.xlsx"), "a.out"),
        vec![
            ((0, 5), 5.0),
            ((1, 1), 0.0),
            ((3, 0), 3.0),
            ((3, 5), 2.5),
        ]
    );
}
