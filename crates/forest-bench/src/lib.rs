//! Edge-list generator, reference partitions and benchmark utilities for
//! `forest-core`.
//!
//! Nothing here is part of the production interface: the slow partitions in
//! [`reference`] exist to cross-check `DisjointSet` results, and
//! [`generator`] produces deterministic workloads for benches and tests.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;
pub mod reference;

pub use generator::{EdgeConfig, SizeTier, Topology, generate_edges};
pub use reference::{LabelPartition, reachable};

/// Returns the path where the huge-tier edge-list fixture is stored on disk.
///
/// The file lives under `target/bench-fixtures/huge.edges` so it is
/// automatically gitignored and shared between the generator binary and
/// the benchmark harness.
pub fn huge_fixture_path() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join("huge.edges")
}
