//! Fixed-capacity membership set over node ids.
//!
//! [`NodeSet`] is the substrate for every node subset in the crate: the
//! chosen nodes of a solution, its unobserved nodes, adjacency rows and the
//! static node classes of an [`Instance`](crate::instance::Instance).
//!
//! Membership changes are O(1) and the cardinality is cached, so
//! `len()` stays O(1) as well. Iteration yields ids in ascending order,
//! which the search relies on for reproducible move enumeration.

use std::fmt;

use bitvec::prelude::*;

/// A set of node ids in `0..capacity`, backed by a bit vector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NodeSet {
    bits: BitVec,
    len: usize,
}

impl NodeSet {
    /// Creates an empty set able to hold ids `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, capacity),
            len: 0,
        }
    }

    /// Creates a set containing every id in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: BitVec::repeat(true, capacity),
            len: capacity,
        }
    }

    /// Creates a set from the given ids.
    ///
    /// # Panics
    /// Panics if an id is `>= capacity`.
    pub fn from_nodes<I: IntoIterator<Item = usize>>(capacity: usize, nodes: I) -> Self {
        let mut set = Self::new(capacity);
        for node in nodes {
            set.insert(node);
        }
        set
    }

    /// Largest id + 1 this set can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of ids in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        node < self.bits.len() && self.bits[node]
    }

    /// Inserts `node`, returning `true` if it was not present.
    #[inline]
    pub fn insert(&mut self, node: usize) -> bool {
        let was_present = self.bits.replace(node, true);
        if !was_present {
            self.len += 1;
        }
        !was_present
    }

    /// Removes `node`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, node: usize) -> bool {
        let was_present = self.bits.replace(node, false);
        if was_present {
            self.len -= 1;
        }
        was_present
    }

    /// Removes and returns the smallest id in the set.
    pub fn pop_first(&mut self) -> Option<usize> {
        let node = self.bits.first_one()?;
        self.remove(node);
        Some(node)
    }

    /// Iterates over the ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Returns `self ∪ other`.
    pub fn union(&self, other: &NodeSet) -> NodeSet {
        debug_assert_eq!(self.capacity(), other.capacity());
        let mut bits = self.bits.clone();
        bits |= other.bits.as_bitslice();
        Self::from_bits(bits)
    }

    /// Returns `self − other`.
    pub fn difference(&self, other: &NodeSet) -> NodeSet {
        debug_assert_eq!(self.capacity(), other.capacity());
        let mut bits = self.bits.clone();
        let complement = !other.bits.clone();
        bits &= complement.as_bitslice();
        Self::from_bits(bits)
    }

    /// Returns `self ∩ other`.
    pub fn intersection(&self, other: &NodeSet) -> NodeSet {
        debug_assert_eq!(self.capacity(), other.capacity());
        let mut bits = self.bits.clone();
        bits &= other.bits.as_bitslice();
        Self::from_bits(bits)
    }

    fn from_bits(bits: BitVec) -> NodeSet {
        let len = bits.count_ones();
        NodeSet { bits, len }
    }

    /// Collects the ids into a vector (ascending).
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_len() {
        let mut set = NodeSet::new(10);
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3), "second insert must report presence");
        assert!(set.insert(7));
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert!(!set.contains(99), "out of range ids are never members");

        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_vec(), vec![7]);
    }

    #[test]
    fn test_full_and_pop_first() {
        let mut set = NodeSet::full(4);
        assert_eq!(set.len(), 4);
        assert_eq!(set.pop_first(), Some(0));
        assert_eq!(set.pop_first(), Some(1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), vec![2, 3]);
        set.pop_first();
        set.pop_first();
        assert_eq!(set.pop_first(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_algebra() {
        let a = NodeSet::from_nodes(8, [0, 1, 2, 5]);
        let b = NodeSet::from_nodes(8, [2, 3, 5, 7]);

        assert_eq!(a.union(&b).to_vec(), vec![0, 1, 2, 3, 5, 7]);
        assert_eq!(a.difference(&b).to_vec(), vec![0, 1]);
        assert_eq!(b.difference(&a).to_vec(), vec![3, 7]);
        assert_eq!(a.intersection(&b).to_vec(), vec![2, 5]);
        assert_eq!(a.intersection(&b).len(), 2);
        assert_eq!(a.difference(&b).len(), 2);
    }

    #[test]
    fn test_set_algebra_across_words() {
        let n = 200;
        let a = NodeSet::from_nodes(n, (0..n).filter(|v| v % 3 == 0));
        let b = NodeSet::from_nodes(n, (0..n).filter(|v| v % 5 == 0));

        let union = a.union(&b);
        let difference = a.difference(&b);
        let intersection = a.intersection(&b);
        for v in 0..n {
            assert_eq!(union.contains(v), v % 3 == 0 || v % 5 == 0, "union {v}");
            assert_eq!(difference.contains(v), v % 3 == 0 && v % 5 != 0, "difference {v}");
            assert_eq!(intersection.contains(v), v % 15 == 0, "intersection {v}");
        }
        assert_eq!(union.len(), union.iter().count());
        assert_eq!(difference.len(), difference.iter().count());
        assert_eq!(intersection.len(), 14);

        // Results compare equal to sets built bit by bit.
        assert_eq!(intersection, NodeSet::from_nodes(n, (0..n).step_by(15)));
        let mut emptied = a.difference(&a);
        assert!(emptied.is_empty());
        assert_eq!(emptied.pop_first(), None);
        assert_eq!(emptied, NodeSet::new(n));
        assert_eq!(a.capacity(), difference.capacity());
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = NodeSet::from_nodes(200, [150, 3, 64, 63, 199, 0]);
        assert_eq!(set.to_vec(), vec![0, 3, 63, 64, 150, 199]);
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut a = NodeSet::new(6);
        a.insert(1);
        a.insert(4);
        a.insert(2);
        a.remove(2);
        let b = NodeSet::from_nodes(6, [4, 1]);
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "{1, 4}");
    }
}
