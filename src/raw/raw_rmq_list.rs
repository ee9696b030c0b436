use alloc::vec::Vec;

use super::node::{self, Link, Node};
use crate::key::Key;
use crate::min_value::MinValue;

/// The core positional tree backing `RmqList`.
///
/// Public positions are 0-based; the descent runs in a uniform 1-based
/// frame (a node's element sits at its own rank), so every operation
/// translates the incoming position once at the root.
#[derive(Clone)]
pub(crate) struct RawRmqList<K: Key, V> {
    /// The root of the tree, if the list is non-empty.
    root: Link<K, V>,
    /// Number of elements in the list.
    len: K,
}

impl<K: Key, V> RawRmqList<K, V> {
    /// Creates a new, empty list.
    pub(crate) const fn new() -> Self {
        Self {
            root: None,
            len: K::ZERO,
        }
    }

    /// Returns the number of elements in the list.
    pub(crate) fn len(&self) -> K {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == K::ZERO
    }

    /// Drops every element. Releases the whole tree as a unit.
    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.len = K::ZERO;
    }

    /// Returns the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Moves every element into a vector, in order.
    pub(crate) fn into_vec(self) -> Vec<V> {
        let mut out = Vec::new();
        node::append_values(self.root, &mut out);
        out
    }
}

impl<K: Key, V: MinValue> RawRmqList<K, V> {
    /// Returns the element at `pos`, or `None` if `pos >= len`.
    pub(crate) fn get(&self, pos: K) -> Option<&V> {
        if pos >= self.len {
            return None;
        }
        node::search(&self.root, pos + K::ONE).map(Node::value)
    }

    /// Inserts `value` at `pos`, shifting every later element right by one.
    pub(crate) fn insert(&mut self, pos: K, value: V) {
        debug_assert!(pos <= self.len, "`RawRmqList::insert()` - `pos` > `len`!");
        let root = self.root.take();
        self.root = Some(node::insert(root, pos + K::ONE, value));
        self.len += K::ONE;
    }

    /// Replaces the element at `pos`, returning the previous value, or
    /// `None` (leaving the list untouched) if `pos >= len`.
    pub(crate) fn update(&mut self, pos: K, value: V) -> Option<V> {
        if pos >= self.len {
            return None;
        }
        node::update(&mut self.root, pos + K::ONE, value)
    }

    /// Returns the minimum over positions `[lo, hi)`, or `V::MAX` when the
    /// interval is empty. `hi` beyond the end is clamped to the end.
    pub(crate) fn range_min(&self, lo: K, hi: K) -> V {
        if lo >= hi {
            return V::MAX;
        }
        if lo == K::ZERO && hi > self.len {
            return self.min().cloned().unwrap_or(V::MAX);
        }
        // An overhanging upper bound covers the right boundary path's
        // subtrees entirely, so it is clamped and answered from the caches.
        let include_right = hi > self.len;
        let hi = if include_right { self.len } else { hi };
        node::range_min(&self.root, lo + K::ONE, hi + K::ONE, include_right)
    }

    /// Returns the minimum over the whole list from the root cache, O(1).
    pub(crate) fn min(&self) -> Option<&V> {
        self.root.as_deref().map(Node::subtree_min)
    }

    /// Verifies the structural invariants of the whole tree: per-node rank,
    /// cached minimum, height, the AVL balance bound, and the element
    /// count. Intended for tests and debugging; O(n).
    pub(crate) fn check_integrity(&self) -> bool {
        match &self.root {
            None => self.len == K::ZERO,
            Some(root) => node::verify(root) == Some(self.len),
        }
    }
}
