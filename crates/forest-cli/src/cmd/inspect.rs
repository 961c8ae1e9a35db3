//! Implementation of `forest inspect <file>`.
//!
//! Parses an edge list and prints summary statistics to stdout:
//! - element and edge counts
//! - number of components, largest component size, singleton count
//! - redundant edges (edges whose endpoints were already connected)
//! - self loops
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use std::io::Write;

use forest_core::{DisjointSet, EdgeList};

use crate::OutputFormat;
use crate::error::CliError;

/// Statistics gathered from an edge list and the forest built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectStats {
    /// Number of elements in the universe.
    pub elements: usize,
    /// Number of edges in the input.
    pub edges: usize,
    /// Number of connected components.
    pub components: usize,
    /// Size of the largest component (0 for an empty universe).
    pub largest: usize,
    /// Number of components with exactly one element.
    pub singletons: usize,
    /// Edges that merged nothing because their endpoints were already joined.
    pub redundant_edges: usize,
    /// Edges whose endpoints are the same element.
    pub self_loops: usize,
}

impl InspectStats {
    /// Computes statistics from a parsed list and the forest built from it.
    pub fn collect(list: &EdgeList, set: &mut DisjointSet) -> Result<Self, CliError> {
        let roots: Vec<usize> = set.roots().collect();
        let mut largest = 0;
        let mut singletons = 0;
        for root in roots {
            let size = set.component_size(root)?;
            largest = largest.max(size);
            if size == 1 {
                singletons += 1;
            }
        }

        let merges = set.len() - set.count();
        Ok(Self {
            elements: set.len(),
            edges: list.edges.len(),
            components: set.count(),
            largest,
            singletons,
            redundant_edges: list.edges.len() - merges,
            self_loops: list.edges.iter().filter(|(v, w)| v == w).count(),
        })
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if `content` is not a valid edge
/// list, or if stdout cannot be written.
pub fn run(content: &str, format: OutputFormat) -> Result<(), CliError> {
    let (list, mut set) = super::load(content)?;
    let stats = InspectStats::collect(&list, &mut set)?;

    super::write_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &stats),
        OutputFormat::Json => print_json(out, &stats),
    })
}

fn print_human(w: &mut dyn Write, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "elements:         {}", stats.elements)?;
    writeln!(w, "edges:            {}", stats.edges)?;
    writeln!(w, "components:       {}", stats.components)?;
    writeln!(w, "largest:          {}", stats.largest)?;
    writeln!(w, "singletons:       {}", stats.singletons)?;
    writeln!(w, "redundant_edges:  {}", stats.redundant_edges)?;
    writeln!(w, "self_loops:       {}", stats.self_loops)?;
    Ok(())
}

fn print_json(w: &mut dyn Write, stats: &InspectStats) -> std::io::Result<()> {
    let value = serde_json::json!({
        "elements": stats.elements,
        "edges": stats.edges,
        "components": stats.components,
        "largest": stats.largest,
        "singletons": stats.singletons,
        "redundant_edges": stats.redundant_edges,
        "self_loops": stats.self_loops,
    });
    writeln!(w, "{value}")
}
