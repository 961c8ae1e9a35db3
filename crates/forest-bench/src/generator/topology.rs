//! Edge-sequence shapes: uniform random, chain, star and clustered.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// `count` edges with both endpoints uniform over `[0, n)`.
pub fn random(rng: &mut StdRng, n: usize, count: usize) -> Vec<(usize, usize)> {
    if n == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// `(0, 1), (1, 2), ..., (n - 2, n - 1)`.
pub fn chain(n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i - 1, i)).collect()
}

/// `(0, i)` for every `i` in `1..n`, shuffled.
pub fn star(rng: &mut StdRng, n: usize) -> Vec<(usize, usize)> {
    let mut edges: Vec<(usize, usize)> = (1..n).map(|i| (0, i)).collect();
    edges.shuffle(rng);
    edges
}

/// `count` edges, each inside one of `clusters` contiguous blocks.
///
/// Block `b` covers `[b * n / clusters, (b + 1) * n / clusters)`. A cluster
/// count of zero is treated as one.
pub fn clusters(rng: &mut StdRng, n: usize, count: usize, clusters: usize) -> Vec<(usize, usize)> {
    let clusters = clusters.clamp(1, n.max(1));
    if n == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let block = rng.gen_range(0..clusters);
            let start = block * n / clusters;
            let end = (block + 1) * n / clusters;
            (rng.gen_range(start..end), rng.gen_range(start..end))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn chain_links_neighbours() {
        assert_eq!(chain(4), vec![(0, 1), (1, 2), (2, 3)]);
        assert!(chain(0).is_empty());
        assert!(chain(1).is_empty());
    }

    #[test]
    fn star_covers_every_leaf_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut leaves: Vec<usize> = star(&mut rng, 6)
            .into_iter()
            .map(|(hub, leaf)| {
                assert_eq!(hub, 0);
                leaf
            })
            .collect();
        leaves.sort_unstable();
        assert_eq!(leaves, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn clusters_stay_inside_blocks() {
        let mut rng = StdRng::seed_from_u64(7);
        for (v, w) in clusters(&mut rng, 100, 500, 4) {
            assert_eq!(v / 25, w / 25, "edge ({v}, {w}) crosses a block boundary");
        }
    }

    #[test]
    fn empty_universe_yields_no_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random(&mut rng, 0, 10).is_empty());
        assert!(clusters(&mut rng, 0, 10, 3).is_empty());
    }
}
