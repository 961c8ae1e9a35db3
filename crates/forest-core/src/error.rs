//! Error taxonomy for [`DisjointSet`](crate::DisjointSet) operations.

use thiserror::Error;

/// Validation failures reported by [`DisjointSet`](crate::DisjointSet).
///
/// Every variant is raised before any write happens, so a rejected call
/// leaves the structure exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisjointSetError {
    /// Construction was requested with a negative element count, or with
    /// more elements than can be allocated.
    #[error("invalid element count {requested}: must be between 0 and {max}", max = crate::disjoint_set::MAX_LEN)]
    InvalidSize {
        /// The rejected count.
        requested: i64,
    },

    /// An element identifier falls outside `[0, len)`.
    ///
    /// `element` is signed so that negative identifiers coming from text
    /// input can be reported verbatim.
    #[error("element {element} out of range: expected 0 <= element < {len}")]
    OutOfRange {
        /// The rejected identifier.
        element: i64,
        /// The number of elements in the universe.
        len: usize,
    },
}

impl DisjointSetError {
    /// Builds an [`InvalidSize`](Self::InvalidSize) for an unsigned count.
    pub(crate) fn invalid_size(requested: usize) -> Self {
        Self::InvalidSize {
            requested: i64::try_from(requested).unwrap_or(i64::MAX),
        }
    }

    /// Builds an [`OutOfRange`](Self::OutOfRange) for an unsigned index.
    pub(crate) fn out_of_range(element: usize, len: usize) -> Self {
        Self::OutOfRange {
            element: i64::try_from(element).unwrap_or(i64::MAX),
            len,
        }
    }
}
