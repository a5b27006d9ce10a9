//! A binary search tree built balanced from a known set of entries.

use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::Error;
use crate::merge_sort::merge_sort;
use crate::raw::{InOrder, RawTree};

/// A binary search tree that is balanced when built and never rebalanced.
///
/// The tree is meant for collections whose members are all known up front:
/// [`from_sorted`](BalancedTree::from_sorted) makes the median of every range
/// the root of that range's subtree, which gives the minimum possible height
/// of `ceil(log2(n + 1))`. After that the tree is usually only shrunk, and a
/// plain BST delete never makes a subtree taller, so lookups stay
/// logarithmic. [`insert`](BalancedTree::insert) is available but does not
/// rebalance.
///
/// Equal keys are allowed. An inserted key equal to an existing one is placed
/// after it in key order (ties descend right), and removing a duplicated key
/// removes the equal entry closest to the root.
///
/// # Examples
///
/// ```
/// use hollow_store::BalancedTree;
///
/// let mut tree = BalancedTree::from_unsorted(vec![(3, "c"), (1, "a"), (4, "d"), (2, "b")]);
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.get(&4), Some(&"d"));
///
/// // Greatest key whose value is not "d".
/// let (key, _) = tree.find_last(|_, value| *value != "d").unwrap();
/// assert_eq!(*key, 3);
///
/// assert_eq!(tree.delete(&3), Ok("c"));
/// assert_eq!(tree.keys_in_order(), vec![1, 2, 4]);
/// ```
pub struct BalancedTree<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> BalancedTree<K, V> {
    /// Makes a new, empty tree.
    #[must_use]
    pub const fn new() -> Self {
        BalancedTree { raw: RawTree::new() }
    }

    /// Makes a new, empty tree with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BalancedTree {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of entries the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of levels in the tree: 0 when empty, 1 for a lone root.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.first()?);
        Some((node.key(), node.value()))
    }

    /// Returns the entry with the greatest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.last()?);
        Some((node.key(), node.value()))
    }

    /// Returns the greatest entry, in key order, for which `pred` holds.
    ///
    /// The walk visits entries from the greatest key down and stops at the
    /// first match, so nothing smaller than the answer is ever looked at.
    ///
    /// # Complexity
    ///
    /// O(height) when the greatest entries match, O(n) in the worst case.
    pub fn find_last<F>(&self, pred: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let node = self.raw.node(self.raw.find_last(pred)?);
        Some((node.key(), node.value()))
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.raw.in_order(),
        }
    }

    /// Moves every entry out of the tree, sorted by key.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        self.raw.into_sorted_vec()
    }
}

impl<K: Ord, V> BalancedTree<K, V> {
    /// Builds a tree from entries already sorted by key.
    ///
    /// The in-order sequence of the result is exactly `entries`, including the
    /// relative order of equal keys.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `entries` is not sorted.
    ///
    /// # Complexity
    ///
    /// Θ(n)
    #[must_use]
    pub fn from_sorted(entries: Vec<(K, V)>) -> Self {
        debug_assert!(
            entries.windows(2).all(|pair| pair[0].0 <= pair[1].0),
            "`BalancedTree::from_sorted()` - `entries` are not sorted!"
        );
        BalancedTree {
            raw: RawTree::from_sorted(entries),
        }
    }

    /// Sorts `entries` with [`merge_sort`] and builds a tree from them.
    ///
    /// # Complexity
    ///
    /// Θ(n log n)
    #[must_use]
    pub fn from_unsorted(entries: Vec<(K, V)>) -> Self {
        Self::from_sorted(merge_sort(entries))
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.raw.node(self.raw.search(key)?);
        Some((node.key(), node.value()))
    }

    /// Returns `true` if the tree holds an entry under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.raw.search(key).is_some()
    }

    /// Inserts an entry without rebalancing.
    ///
    /// Unlike a map, an existing entry with an equal key is kept; the new one
    /// lands after it in key order.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: K, value: V) {
        self.raw.insert(key, value);
    }

    /// Removes an entry stored under `key` and returns it.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.raw.remove_entry(key)
    }

    /// Removes an entry stored under `key` and returns its value.
    ///
    /// For callers that only delete keys they have just looked up, where a
    /// miss means their bookkeeping is broken.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no entry has that key; the tree is unchanged.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.raw.remove_entry(key).map(|(_, value)| value).ok_or(Error::KeyNotFound)
    }
}

impl<K: Clone, V> BalancedTree<K, V> {
    /// Collects the keys in order. Handy for assertions.
    #[must_use]
    pub fn keys_in_order(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }
}

impl<K: Clone, V: Clone> Clone for BalancedTree<K, V> {
    fn clone(&self) -> Self {
        BalancedTree { raw: self.raw.clone() }
    }
}

impl<K, V> Default for BalancedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BalancedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BalancedTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a, K, V> IntoIterator for &'a BalancedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An in-order iterator over the entries of a `BalancedTree`.
///
/// This `struct` is created by the [`iter`] method on [`BalancedTree`].
///
/// [`iter`]: BalancedTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: InOrder<'a, K, V>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
