/// Command module for the `forest` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input text and parsed arguments and returns `Ok(())` on
/// success or a [`CliError`] on failure.
pub mod components;
pub mod connected;
pub mod find;
pub mod inspect;
pub mod size;

use std::io::Write;

use forest_core::{DisjointSet, EdgeList, parse_edge_list};

use crate::error::CliError;

/// Parses `content` as an edge list and applies every edge.
pub(crate) fn load(content: &str) -> Result<(EdgeList, DisjointSet), CliError> {
    let list = parse_edge_list(content)?;
    let set = list.build()?;
    Ok((list, set))
}

/// Validates a signed element argument against the universe of `set`.
pub(crate) fn element(set: &DisjointSet, raw: i64) -> Result<usize, CliError> {
    Ok(set.element(raw)?)
}

/// Runs `print` against a locked stdout, mapping write failures.
pub(crate) fn write_stdout<F>(print: F) -> Result<(), CliError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })
}
