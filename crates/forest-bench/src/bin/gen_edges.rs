//! Generates the huge-tier edge-list fixture to disk.
//!
//! Writes `target/bench-fixtures/huge.edges`, which is loaded by
//! `benches/union_find.rs` at benchmark time and can be fed straight to the
//! `forest` CLI.

use std::error::Error;
use std::fs;
use std::io::{BufWriter, Write as _};

use forest_bench::{SizeTier, Topology, generate_edges, huge_fixture_path};

fn main() -> Result<(), Box<dyn Error>> {
    let path = huge_fixture_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Generating Huge tier (2M elements, random topology)...");
    let list = generate_edges(&SizeTier::Huge.config(42, Topology::Random));
    eprintln!("Generated {} elements, {} edges", list.len, list.edges.len());

    eprintln!("Writing edge list to {}...", path.display());
    let mut out = BufWriter::new(fs::File::create(&path)?);
    write!(out, "{list}")?;
    out.flush()?;

    let meta = fs::metadata(&path)?;
    eprintln!("Edge list: {:.1} MB", meta.len() as f64 / (1024.0 * 1024.0));

    Ok(())
}
