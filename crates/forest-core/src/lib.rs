//! Disjoint-set (union-find) forest over a fixed universe of elements.
//!
//! [`DisjointSet`] groups the elements `0..n` into components as edges are
//! added and answers connectivity queries in near-constant amortized time.
//! [`edge_list`] parses the plain-text `n` + edges input used by the `forest`
//! command-line tool.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod disjoint_set;
pub mod edge_list;
pub mod error;

pub use disjoint_set::{DisjointSet, MAX_LEN};
pub use edge_list::{EdgeList, EdgeListError, parse_edge_list};
pub use error::DisjointSetError;

/// Returns the current version of the forest-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
