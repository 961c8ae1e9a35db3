//! Edge-list generator.
//!
//! Produces [`EdgeList`] workloads with a chosen shape for benchmarking and
//! differential testing.

pub mod topology;

use forest_core::EdgeList;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shape of the generated edge sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Endpoints drawn uniformly from the whole universe.
    Random,
    /// `(i, i + 1)` for every `i` in order: one long path, the worst case for
    /// a forest without balancing. `edges` is ignored.
    Chain,
    /// Element 0 joined to every other element, in shuffled order. `edges`
    /// is ignored.
    Star,
    /// Contiguous blocks of elements with random edges only inside a block,
    /// so the result has roughly `clusters` components.
    Clusters {
        /// Number of blocks the universe is cut into.
        clusters: usize,
    },
}

/// Configuration for the edge generator.
#[derive(Debug, Clone)]
pub struct EdgeConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of elements in the universe.
    pub elements: usize,
    /// Number of edges for the topologies that take a count.
    pub edges: usize,
    /// Shape of the edge sequence.
    pub topology: Topology,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1K elements, 2K edges
    Small,
    /// 20K elements, 40K edges
    Medium,
    /// 200K elements, 400K edges
    Large,
    /// 2M elements, 4M edges (written to disk by `gen-edges`)
    Huge,
}

impl SizeTier {
    /// Returns the `EdgeConfig` for this size tier with the given shape.
    pub fn config(self, seed: u64, topology: Topology) -> EdgeConfig {
        let elements = match self {
            SizeTier::Small => 1_000,
            SizeTier::Medium => 20_000,
            SizeTier::Large => 200_000,
            SizeTier::Huge => 2_000_000,
        };
        EdgeConfig {
            seed,
            elements,
            edges: elements * 2,
            topology,
        }
    }
}

/// Generates an edge list from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Every edge
/// names elements in `[0, config.elements)`.
pub fn generate_edges(config: &EdgeConfig) -> EdgeList {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.elements;
    let edges = match config.topology {
        Topology::Random => topology::random(&mut rng, n, config.edges),
        Topology::Chain => topology::chain(n),
        Topology::Star => topology::star(&mut rng, n),
        Topology::Clusters { clusters } => {
            topology::clusters(&mut rng, n, config.edges, clusters)
        }
    };
    EdgeList { len: n, edges }
}
