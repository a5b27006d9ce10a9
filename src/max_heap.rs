//! An array-backed binary max-heap of `(key, value)` pairs.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::slice;

use alloc::vec::Vec;

/// A binary max-heap ordered by key, laid out in a `Vec` with the root at
/// index 0 and the children of `i` at `2i + 1` and `2i + 2`.
///
/// Only keys are compared. Entries with equal keys come out in no particular
/// order relative to each other.
///
/// # Examples
///
/// ```
/// use hollow_store::MaxHeap;
///
/// let mut heap = MaxHeap::heapify(vec![(2, 'b'), (7, 'g'), (4, 'd')]);
/// assert_eq!(heap.peek(), Some((&7, &'g')));
///
/// heap.add(9, 'i');
/// assert_eq!(heap.extract_max(), Some((9, 'i')));
/// assert_eq!(heap.extract_max(), Some((7, 'g')));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone)]
pub struct MaxHeap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> MaxHeap<K, V> {
    /// Makes a new, empty heap.
    #[must_use]
    pub const fn new() -> Self {
        MaxHeap { entries: Vec::new() }
    }

    /// Makes a new, empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        MaxHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the entry with the greatest key without removing it.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Iterates over the entries in array order, which is not key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Ord, V> MaxHeap<K, V> {
    /// Arranges `entries` into a heap in place.
    ///
    /// Sifts every internal node down, last parent first. Most nodes sit near
    /// the bottom and move at most a level or two, which is what keeps this
    /// linear where `n` calls to [`add`](MaxHeap::add) would be Θ(n log n).
    ///
    /// # Complexity
    ///
    /// Θ(n)
    #[must_use]
    pub fn heapify(entries: Vec<(K, V)>) -> Self {
        let mut heap = MaxHeap { entries };
        for index in (0..heap.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// Removes and returns the entry with the greatest key.
    ///
    /// The last entry replaces the root and sifts down.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn extract_max(&mut self) -> Option<(K, V)> {
        let last = self.entries.pop()?;
        let Some(root) = self.entries.first_mut() else {
            return Some(last);
        };
        let max = mem::replace(root, last);
        self.sift_down(0);
        Some(max)
    }

    /// Same as [`extract_max`](MaxHeap::extract_max).
    pub fn get_max(&mut self) -> Option<(K, V)> {
        self.extract_max()
    }

    /// Adds an entry, sifting it up past every parent with a smaller key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn add(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Empties the heap into a `Vec` sorted by key, greatest first.
    ///
    /// # Complexity
    ///
    /// Θ(n log n)
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.extract_max() {
            sorted.push(entry);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 <= self.entries[parent].0 {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let larger = if right < len && self.entries[right].0 > self.entries[left].0 {
                right
            } else {
                left
            };
            if self.entries[larger].0 <= self.entries[index].0 {
                break;
            }
            self.entries.swap(index, larger);
            index = larger;
        }
    }
}

impl<K, V> Default for MaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MaxHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MaxHeap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::heapify(iter.into_iter().collect())
    }
}

impl<'a, K, V> IntoIterator for &'a MaxHeap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An iterator over the entries of a `MaxHeap` in array order.
///
/// This `struct` is created by the [`iter`] method on [`MaxHeap`].
///
/// [`iter`]: MaxHeap::iter
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
