//! End-to-end error handling: exit codes and messages for bad input.
#![allow(clippy::expect_used)]

mod common;

use common::{fixture, run, run_with_stdin, stderr, temp_edges};

#[test]
fn missing_file_exits_2() {
    let out = run(&["components", "/no/such/file.edges"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("not found"), "stderr: {}", stderr(&out));
}

#[test]
fn malformed_line_exits_2_with_line_number() {
    let out = run(&["components", &fixture("malformed.edges")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("line 3"), "stderr: {}", stderr(&out));
}

#[test]
fn negative_count_exits_2() {
    let f = temp_edges("-3\n");
    let out = run(&["inspect", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("-3"), "stderr: {}", stderr(&out));
}

#[test]
fn huge_count_exits_2_without_panicking() {
    let out = run_with_stdin(&["components", "-"], "9223372036854775807\n");
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("invalid element count"), "stderr: {err}");
    assert!(!err.contains("panicked"), "stderr: {err}");
}

#[test]
fn out_of_range_edge_exits_2() {
    let f = temp_edges("3\n0 1\n1 3\n");
    let out = run(&["components", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("line 3"), "stderr: {err}");
    assert!(err.contains("out of range"), "stderr: {err}");
}

#[test]
fn empty_input_exits_2() {
    let out = run_with_stdin(&["components", "-"], "# nothing here\n");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn file_over_size_limit_exits_2() {
    let out = run(&[
        "components",
        &fixture("scenario.edges"),
        "--max-file-size",
        "4",
    ]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("too large"), "stderr: {}", stderr(&out));
}

#[test]
fn stdin_over_size_limit_exits_2() {
    let out = run_with_stdin(&["components", "-", "--max-file-size", "3"], "5\n0 1\n");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn invalid_utf8_exits_2() {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    std::io::Write::write_all(&mut f, b"2\n0 \xff\n").expect("write temp file");
    let out = run(&["components", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("UTF-8"), "stderr: {}", stderr(&out));
}

#[test]
fn quiet_still_reports_errors() {
    let out = run(&["--quiet", "components", "/no/such/file.edges"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!stderr(&out).is_empty());
}
