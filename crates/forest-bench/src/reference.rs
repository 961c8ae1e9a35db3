//! Slow but obviously correct partitions used as oracles.
//!
//! [`LabelPartition`] stores one component label per element and relabels
//! in O(n) on every merge. [`reachable`] answers connectivity by breadth-first
//! search over the undirected graph built from the edges. Both index
//! directly and panic on identifiers outside the universe.

use std::collections::HashSet;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

/// A partition stored as a flat array of component labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPartition {
    labels: Vec<usize>,
}

impl LabelPartition {
    /// Creates `n` singleton components; element `i` starts with label `i`.
    pub fn new(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
        }
    }

    /// Creates `n` singletons and merges along every edge, in order.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut partition = Self::new(n);
        for &(v, w) in edges {
            partition.union(v, w);
        }
        partition
    }

    /// Moves every element labelled like `w` into `v`'s component.
    ///
    /// Returns `false` if they already shared a label.
    pub fn union(&mut self, v: usize, w: usize) -> bool {
        let (keep, replace) = (self.labels[v], self.labels[w]);
        if keep == replace {
            return false;
        }
        for label in &mut self.labels {
            if *label == replace {
                *label = keep;
            }
        }
        true
    }

    /// Returns the label of `v`'s component.
    pub fn label(&self, v: usize) -> usize {
        self.labels[v]
    }

    /// Returns `true` if `v` and `w` share a label.
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.labels[v] == self.labels[w]
    }

    /// Counts the elements sharing `v`'s label.
    pub fn component_size(&self, v: usize) -> usize {
        let label = self.labels[v];
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// Counts distinct labels.
    pub fn count(&self) -> usize {
        self.labels.iter().collect::<HashSet<_>>().len()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the partition has no elements.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Collects every element reachable from `start` over the undirected edges.
///
/// The result always contains `start` itself.
pub fn reachable(n: usize, edges: &[(usize, usize)], start: usize) -> HashSet<usize> {
    let mut graph = UnGraph::<(), ()>::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for &(v, w) in edges {
        graph.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }

    let mut seen = HashSet::new();
    let mut bfs = Bfs::new(&graph, NodeIndex::new(start));
    while let Some(node) = bfs.next(&graph) {
        seen.insert(node.index());
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES: [(usize, usize); 3] = [(0, 1), (2, 1), (3, 4)];

    #[test]
    fn label_partition_scenario() {
        let partition = LabelPartition::from_edges(5, &EDGES);
        assert!(partition.connected(0, 1));
        assert!(partition.connected(1, 2));
        assert!(partition.connected(3, 4));
        assert!(!partition.connected(0, 3));
        assert_eq!(partition.count(), 2);
        assert_eq!(partition.component_size(2), 3);
        assert_eq!(partition.len(), 5);
    }

    #[test]
    fn label_partition_union_reports_merge() {
        let mut partition = LabelPartition::new(3);
        assert!(partition.union(0, 2));
        assert!(!partition.union(2, 0));
        assert_eq!(partition.label(2), partition.label(0));
    }

    #[test]
    fn reachable_scenario() {
        assert_eq!(reachable(5, &EDGES, 1), HashSet::from([0, 1, 2]));
        assert_eq!(reachable(5, &EDGES, 3), HashSet::from([3, 4]));
    }

    #[test]
    fn isolated_element_reaches_itself() {
        assert_eq!(reachable(3, &[(0, 1)], 2), HashSet::from([2]));
    }
}
