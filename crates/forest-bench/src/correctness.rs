//! Post-operation invariant checkers for correctness validation.

use std::collections::{HashMap, HashSet};

use forest_core::DisjointSet;

use crate::reference::LabelPartition;

/// Verifies that the component counter and recorded sizes agree with a full
/// recount of every element's root.
pub fn check_partition_invariants(set: &mut DisjointSet) -> Result<(), String> {
    let n = set.len();
    let mut members: HashMap<usize, usize> = HashMap::new();
    for v in 0..n {
        let root = set.find(v).map_err(|e| e.to_string())?;
        *members.entry(root).or_default() += 1;
    }

    if members.len() != set.count() {
        return Err(format!(
            "count mismatch: counter={}, distinct roots={}",
            set.count(),
            members.len()
        ));
    }

    let roots: HashSet<usize> = set.roots().collect();
    if roots != members.keys().copied().collect::<HashSet<_>>() {
        return Err("roots() disagrees with the roots reached by find".to_owned());
    }

    let mut total = 0;
    for (&root, &expected) in &members {
        let recorded = set.component_size(root).map_err(|e| e.to_string())?;
        if recorded != expected {
            return Err(format!(
                "size mismatch at root {root}: recorded={recorded}, members={expected}"
            ));
        }
        total += recorded;
    }
    if total != n {
        return Err(format!("sizes sum to {total}, universe has {n} elements"));
    }
    Ok(())
}

/// Verifies that both endpoints of every edge share a root.
pub fn check_edges_connected(
    set: &mut DisjointSet,
    edges: &[(usize, usize)],
) -> Result<(), String> {
    for (i, &(v, w)) in edges.iter().enumerate() {
        if !set.connected(v, w).map_err(|e| e.to_string())? {
            return Err(format!("edge {i} ({v}, {w}) left its endpoints apart"));
        }
    }
    Ok(())
}

/// Verifies that `set` and `reference` describe the same partition.
///
/// Roots and labels are matched as a bijection, so the check is O(n) rather
/// than comparing every pair.
pub fn check_matches_reference(
    set: &mut DisjointSet,
    reference: &LabelPartition,
) -> Result<(), String> {
    if set.len() != reference.len() {
        return Err(format!(
            "universe mismatch: set={}, reference={}",
            set.len(),
            reference.len()
        ));
    }

    let mut label_of_root: HashMap<usize, usize> = HashMap::new();
    let mut root_of_label: HashMap<usize, usize> = HashMap::new();
    for v in 0..set.len() {
        let root = set.find(v).map_err(|e| e.to_string())?;
        let label = reference.label(v);
        if *label_of_root.entry(root).or_insert(label) != label
            || *root_of_label.entry(label).or_insert(root) != root
        {
            return Err(format!(
                "element {v}: root {root} and label {label} group different elements"
            ));
        }
    }

    if set.count() != reference.count() {
        return Err(format!(
            "count mismatch: set={}, reference={}",
            set.count(),
            reference.count()
        ));
    }
    Ok(())
}

/// Verifies that no element sits deeper than `floor(log2(len))`, the bound
/// union by size guarantees.
pub fn check_depth_bound(set: &DisjointSet) -> Result<(), String> {
    let bound = set.len().checked_ilog2().unwrap_or(0) as usize;
    for v in 0..set.len() {
        let depth = set.depth(v).map_err(|e| e.to_string())?;
        if depth > bound {
            return Err(format!("element {v} has depth {depth}, bound is {bound}"));
        }
    }
    Ok(())
}
