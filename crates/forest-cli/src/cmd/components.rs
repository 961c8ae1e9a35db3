//! Implementation of `forest components <file>`.
//!
//! Output (human mode): one line per component, members ascending and
//! separated by spaces, components ordered by their smallest member.
//! Output (JSON mode): `{"count": N, "components": [[...], ...]}`.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use std::io::Write;

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `components` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if `content` is not a valid edge
/// list, or if stdout cannot be written.
pub fn run(content: &str, format: OutputFormat) -> Result<(), CliError> {
    let (_, mut set) = super::load(content)?;
    let groups = set.groups();
    log::debug!("found {} component(s)", groups.len());

    super::write_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &groups),
        OutputFormat::Json => print_json(out, &groups),
    })
}

fn print_human(w: &mut dyn Write, groups: &[Vec<usize>]) -> std::io::Result<()> {
    for group in groups {
        let line: Vec<String> = group.iter().map(ToString::to_string).collect();
        writeln!(w, "{}", line.join(" "))?;
    }
    Ok(())
}

fn print_json(w: &mut dyn Write, groups: &[Vec<usize>]) -> std::io::Result<()> {
    let value = serde_json::json!({
        "count": groups.len(),
        "components": groups,
    });
    writeln!(w, "{value}")
}
