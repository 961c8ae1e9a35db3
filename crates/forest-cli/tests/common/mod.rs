//! Helpers shared by the `forest` integration tests.
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `forest` binary.
pub fn forest_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("forest");
    path
}

/// Path to a shared fixture file.
pub fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("fixture path is UTF-8").to_owned()
}

/// Runs `forest` with `args`.
pub fn run(args: &[&str]) -> Output {
    Command::new(forest_bin())
        .args(args)
        .env_remove("FOREST_LOG")
        .env_remove("FOREST_MAX_FILE_SIZE")
        .output()
        .expect("run forest")
}

/// Runs `forest` with `args`, feeding `input` on stdin.
pub fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(forest_bin())
        .args(args)
        .env_remove("FOREST_LOG")
        .env_remove("FOREST_MAX_FILE_SIZE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn forest");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for forest")
}

/// Writes `contents` to a fresh temporary file.
pub fn temp_edges(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}
