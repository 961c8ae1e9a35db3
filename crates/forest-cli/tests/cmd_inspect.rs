//! Integration tests for `forest inspect`.
#![allow(clippy::expect_used)]

mod common;

use common::{fixture, run, stdout};

#[test]
fn inspect_human_lists_statistics() {
    let out = run(&["inspect", &fixture("isolated.edges")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let text = stdout(&out);
    assert!(text.contains("elements:         7"), "output: {text}");
    assert!(text.contains("edges:            5"), "output: {text}");
    assert!(text.contains("components:       4"), "output: {text}");
    assert!(text.contains("largest:          3"), "output: {text}");
    assert!(text.contains("singletons:       2"), "output: {text}");
    assert!(text.contains("redundant_edges:  2"), "output: {text}");
    assert!(text.contains("self_loops:       1"), "output: {text}");
}

#[test]
fn inspect_json_scenario() {
    let out = run(&["inspect", &fixture("scenario.edges"), "--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(value["elements"], 5);
    assert_eq!(value["components"], 2);
    assert_eq!(value["largest"], 3);
    assert_eq!(value["redundant_edges"], 0);
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = run(&["inspect", &fixture("scenario.edges"), "--verbose", "-f", "json"]);
    assert!(out.status.success());
    serde_json::from_slice::<serde_json::Value>(&out.stdout)
        .expect("stdout stays pure json with logging on");
    assert!(
        !out.stderr.is_empty(),
        "--verbose should emit debug records to stderr"
    );
}
