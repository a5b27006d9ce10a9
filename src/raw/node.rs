use core::mem;

use super::node_id::NodeId;

/// One entry of a binary search tree.
///
/// `height` counts nodes on the longest downward path, so a leaf has height 1
/// and an absent child counts as 0.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    height: u32,
}

impl<K, V> Node<K, V> {
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self::with_children(key, value, None, None, 1)
    }

    pub(crate) const fn with_children(
        key: K,
        value: V,
        left: Option<NodeId>,
        right: Option<NodeId>,
        height: u32,
    ) -> Self {
        Self {
            key,
            value,
            left,
            right,
            height,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline]
    pub(crate) const fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }

    pub(crate) fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Swaps in a new key/value pair, keeping the node's links, and returns the old pair.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (mem::replace(&mut self.key, key), mem::replace(&mut self.value, value))
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
