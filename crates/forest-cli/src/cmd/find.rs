//! Implementation of `forest find <file> <v>`.
//!
//! Output (human mode): the representative element id.
//! Output (JSON mode): `{"element": V, "root": R}`.
//!
//! Exit codes: 0 = success, 1 = element out of range, 2 = read/parse failure.
use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `find` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a valid edge list.
/// - [`CliError`] exit code 1 if `v` is outside the universe.
pub fn run(content: &str, v: i64, format: OutputFormat) -> Result<(), CliError> {
    let (_, mut set) = super::load(content)?;
    let v = super::element(&set, v)?;
    let root = set.find(v)?;

    super::write_stdout(|out| match format {
        OutputFormat::Human => writeln!(out, "{root}"),
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::json!({ "element": v, "root": root }))
        }
    })
}
