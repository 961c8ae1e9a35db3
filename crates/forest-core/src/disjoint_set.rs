//! Disjoint-set forest over a fixed universe of elements.
//!
//! Elements are `usize` identifiers in `[0, n)` where `n` is fixed at
//! construction. Each element owns one slot that is either a parent
//! pointer or, for the representative of a component, the size of that
//! component.
//!
//! Two optimizations combine to give O(m·α(n)) amortized work for any
//! sequence of `m` operations:
//!
//! - **Union by size**: the root of the smaller component is attached under
//!   the root of the larger one, so an element's depth only grows when its
//!   component at least doubles. Trees stay O(log k) deep for size `k`.
//! - **Full path compression**: [`DisjointSet::find`] rewrites every element
//!   on the walked path to point directly at the root.
//!
//! When two components of equal size are merged the **lower identifier**
//! survives as the root, so the representative of a merge does not depend on
//! argument order.

use std::cmp::Ordering;
use std::mem::size_of;

use crate::error::DisjointSetError;

/// One cell of the backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Points at another element of the same component, closer to the root.
    Parent(usize),
    /// Marks a representative; carries the number of elements in its component.
    Root(usize),
}

/// Largest number of elements a [`DisjointSet`] can hold.
pub const MAX_LEN: usize = isize::MAX.unsigned_abs() / size_of::<Slot>();

/// A union-find structure with union-by-size and full path compression.
///
/// # Mutation on lookup
///
/// [`find`](Self::find), [`connected`](Self::connected),
/// [`component_size`](Self::component_size) and [`groups`](Self::groups) all
/// take `&mut self`: they compress the paths they walk. The partition they
/// observe is never changed by this, only the internal shape of the trees.
/// Callers sharing a `DisjointSet` between threads must therefore treat every
/// query as a write and serialize access around the whole structure.
///
/// # Example
///
/// ```
/// use forest_core::DisjointSet;
///
/// let mut set = DisjointSet::from_edges(5, [(0, 1), (2, 1), (3, 4)])?;
/// assert!(set.connected(0, 2)?);
/// assert!(!set.connected(0, 3)?);
/// assert_eq!(set.count(), 2);
/// assert_eq!(set.component_size(0)?, 3);
/// # Ok::<(), forest_core::DisjointSetError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisjointSet {
    slots: Vec<Slot>,
    count: usize,
}

impl DisjointSet {
    /// Creates a structure with `n` singleton components.
    ///
    /// # Panics
    ///
    /// Panics like `Vec` does if `n` exceeds [`MAX_LEN`] or the slots cannot
    /// be allocated. Use [`try_new`](Self::try_new) for untrusted counts.
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![Slot::Root(1); n],
            count: n,
        }
    }

    /// Creates a structure from a signed element count.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::InvalidSize`] if `n` is negative, exceeds
    /// [`MAX_LEN`], or the slots cannot be allocated.
    pub fn try_new(n: i64) -> Result<Self, DisjointSetError> {
        let len = usize::try_from(n).map_err(|_| DisjointSetError::InvalidSize { requested: n })?;
        Self::allocate(len)
    }

    /// Creates `n` singletons and applies `union` for every edge, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::InvalidSize`] if `n` slots cannot be
    /// allocated, and [`DisjointSetError::OutOfRange`] for the first edge
    /// naming an element outside `[0, n)`. No structure is returned in
    /// either case.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, DisjointSetError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = Self::allocate(n)?;
        let mut total = 0usize;
        let mut merges = 0usize;
        for (v, w) in edges {
            total += 1;
            if set.union(v, w)? {
                merges += 1;
            }
        }
        log::debug!(
            "applied {total} edge(s) over {n} element(s): {merges} merge(s), {} component(s)",
            set.count
        );
        Ok(set)
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the universe contains no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of distinct components.
    ///
    /// Maintained as a counter, so this is O(1).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Validates a signed identifier and converts it to an element index.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if `raw` is negative or not
    /// below [`len`](Self::len).
    pub fn element(&self, raw: i64) -> Result<usize, DisjointSetError> {
        checked_element(raw, self.slots.len())
    }

    /// Returns the representative of the component containing `v`.
    ///
    /// Every element visited on the way to the root is re-pointed directly at
    /// the root. Repeated calls return the same root until a [`union`]
    /// merges `v`'s component with another.
    ///
    /// [`union`]: Self::union
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if `v >= len()`.
    pub fn find(&mut self, v: usize) -> Result<usize, DisjointSetError> {
        self.check(v)?;
        Ok(self.locate(v).0)
    }

    /// Merges the components containing `v` and `w`.
    ///
    /// Returns `Ok(true)` if two distinct components were merged and
    /// `Ok(false)` if `v` and `w` were already connected.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if either element is out of
    /// range. Both are checked before anything is written.
    pub fn union(&mut self, v: usize, w: usize) -> Result<bool, DisjointSetError> {
        self.check(v)?;
        self.check(w)?;

        let (root_v, size_v) = self.locate(v);
        let (root_w, size_w) = self.locate(w);
        if root_v == root_w {
            return Ok(false);
        }

        let (winner, loser) = match size_v.cmp(&size_w) {
            Ordering::Greater => (root_v, root_w),
            Ordering::Less => (root_w, root_v),
            Ordering::Equal => (root_v.min(root_w), root_v.max(root_w)),
        };
        let size = size_v + size_w;
        self.slots[loser] = Slot::Parent(winner);
        self.slots[winner] = Slot::Root(size);
        self.count -= 1;

        log::trace!("merged root {loser} into {winner}, component size now {size}");
        Ok(true)
    }

    /// Returns `true` if `v` and `w` belong to the same component.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if either element is out of
    /// range.
    pub fn connected(&mut self, v: usize, w: usize) -> Result<bool, DisjointSetError> {
        self.check(v)?;
        self.check(w)?;
        Ok(self.locate(v).0 == self.locate(w).0)
    }

    /// Returns the number of elements in the component containing `v`.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if `v >= len()`.
    pub fn component_size(&mut self, v: usize) -> Result<usize, DisjointSetError> {
        self.check(v)?;
        Ok(self.locate(v).1)
    }

    /// Returns how many parent hops separate `v` from its root.
    ///
    /// Unlike [`find`](Self::find) this does not compress anything.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfRange`] if `v >= len()`.
    pub fn depth(&self, v: usize) -> Result<usize, DisjointSetError> {
        self.check(v)?;
        let mut hops = 0;
        let mut current = v;
        while let Slot::Parent(parent) = self.slots[current] {
            current = parent;
            hops += 1;
        }
        Ok(hops)
    }

    /// Iterates over the current representatives in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(v, slot)| matches!(slot, Slot::Root(_)).then_some(v))
    }

    /// Lists every component as an ascending list of its members.
    ///
    /// Components are ordered by their smallest member. Compresses every
    /// path as a side effect.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut group_of_root: Vec<Option<usize>> = vec![None; self.slots.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.count);

        for v in 0..self.slots.len() {
            let (root, size) = self.locate(v);
            let index = *group_of_root[root].get_or_insert_with(|| {
                groups.push(Vec::with_capacity(size));
                groups.len() - 1
            });
            groups[index].push(v);
        }
        groups
    }

    fn allocate(n: usize) -> Result<Self, DisjointSetError> {
        if n > MAX_LEN {
            return Err(DisjointSetError::invalid_size(n));
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(n)
            .map_err(|_| DisjointSetError::invalid_size(n))?;
        slots.resize(n, Slot::Root(1));
        Ok(Self { slots, count: n })
    }

    fn check(&self, v: usize) -> Result<(), DisjointSetError> {
        if v < self.slots.len() {
            Ok(())
        } else {
            Err(DisjointSetError::out_of_range(v, self.slots.len()))
        }
    }

    /// Returns `(root, size)` for an in-range `v`, compressing the path.
    fn locate(&mut self, v: usize) -> (usize, usize) {
        let mut root = v;
        let size = loop {
            match self.slots[root] {
                Slot::Parent(parent) => root = parent,
                Slot::Root(size) => break size,
            }
        };

        let mut current = v;
        while let Slot::Parent(parent) = self.slots[current] {
            self.slots[current] = Slot::Parent(root);
            current = parent;
        }
        (root, size)
    }
}

/// Validates a signed identifier against a universe of `len` elements.
pub(crate) fn checked_element(raw: i64, len: usize) -> Result<usize, DisjointSetError> {
    usize::try_from(raw)
        .ok()
        .filter(|&v| v < len)
        .ok_or(DisjointSetError::OutOfRange { element: raw, len })
}
