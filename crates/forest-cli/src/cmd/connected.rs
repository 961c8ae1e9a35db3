//! Implementation of `forest connected <file> <v> <w>`.
//!
//! Output (human mode): `true` or `false`.
//! Output (JSON mode): `{"v": V, "w": W, "connected": bool}`.
//!
//! Exit codes: 0 = answered, 1 = element out of range, 2 = read/parse failure.
use std::io::Write;

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `connected` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a valid edge list.
/// - [`CliError`] exit code 1 if `v` or `w` is outside the universe.
pub fn run(content: &str, v: i64, w: i64, format: OutputFormat) -> Result<(), CliError> {
    let (_, mut set) = super::load(content)?;
    let v = super::element(&set, v)?;
    let w = super::element(&set, w)?;
    let connected = set.connected(v, w)?;

    super::write_stdout(|out| match format {
        OutputFormat::Human => writeln!(out, "{connected}"),
        OutputFormat::Json => print_json(out, v, w, connected),
    })
}

fn print_json(out: &mut dyn Write, v: usize, w: usize, connected: bool) -> std::io::Result<()> {
    let value = serde_json::json!({
        "v": v,
        "w": w,
        "connected": connected,
    });
    writeln!(out, "{value}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    const INPUT: &str = "5\n0 1\n2 1\n3 4\n";

    #[test]
    fn json_contains_answer() {
        let mut buf = Vec::new();
        print_json(&mut buf, 0, 4, false).expect("write to vec");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value["v"], 0);
        assert_eq!(value["w"], 4);
        assert_eq!(value["connected"], false);
    }

    #[test]
    fn negative_element_is_exit_1() {
        let err = run(INPUT, -1, 0, OutputFormat::Human).expect_err("-1 is out of range");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn element_equal_to_len_is_exit_1() {
        let err = run(INPUT, 0, 5, OutputFormat::Json).expect_err("5 is out of range");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn bad_input_is_exit_2() {
        let err = run("5\n0\n", 0, 1, OutputFormat::Human).expect_err("malformed line");
        assert_eq!(err.exit_code(), 2);
    }
}
