use core::fmt;

use alloc::vec::Vec;
use log::{debug, trace};

use super::Selector;
use crate::item::{EntryKey, key_items};
use crate::{Error, MaxHeap, Weighted};

/// Best-fit selection over a max-heap.
///
/// Building heapifies the items in linear time. A query pops the
/// highest-ratio item until one fits, parking the rejects in a buffer, and
/// adds the buffer back before returning, whether or not anything fit. That
/// costs O(log n) when the top item fits and O(n log n) when none do.
///
/// After a miss the heap holds the same items as before, but not necessarily
/// in the same array slots.
///
/// # Examples
///
/// ```
/// use hollow_store::{HeapSelector, Selector, WeightedItem};
///
/// let mut hollow = HeapSelector::initialize(vec![
///     WeightedItem::new(10.0, 5.0),
///     WeightedItem::new(9.0, 3.0),
///     WeightedItem::new(4.0, 4.0),
/// ])?;
///
/// assert_eq!(hollow.get_optimal(4.0), Some(WeightedItem::new(9.0, 3.0)));
/// assert_eq!(hollow.get_optimal(4.0), Some(WeightedItem::new(4.0, 4.0)));
/// assert_eq!(hollow.get_optimal(4.0), None);
/// assert_eq!(hollow.len(), 1);
/// # Ok::<(), hollow_store::Error>(())
/// ```
pub struct HeapSelector<T> {
    heap: MaxHeap<EntryKey, T>,
}

impl<T: Weighted> HeapSelector<T> {
    /// Validates `items` and heapifies them.
    ///
    /// An empty list gives an empty selector.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`] or [`Error::InvalidValue`] for the first item
    /// without a finite, non-negative ratio.
    ///
    /// # Complexity
    ///
    /// Θ(n)
    pub fn initialize(items: Vec<T>) -> Result<Self, Error> {
        let heap = MaxHeap::heapify(key_items(items)?);
        debug!("built heap selector: {} items", heap.len());
        Ok(HeapSelector { heap })
    }
}

impl<T> HeapSelector<T> {
    /// Iterates over the items in heap array order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|(_, item)| item)
    }
}

impl<T: Weighted> HeapSelector<T> {
    fn restore(&mut self, rejected: Vec<(EntryKey, T)>) {
        for (key, item) in rejected {
            self.heap.add(key, item);
        }
    }
}

impl<T: Weighted> Selector for HeapSelector<T> {
    type Item = T;

    fn get_optimal(&mut self, capacity: f64) -> Option<T> {
        let mut rejected = Vec::new();

        while let Some((key, item)) = self.heap.extract_max() {
            if item.weight() <= capacity {
                trace!(
                    "heap selector: took ratio {} for capacity {capacity} after {} rejects",
                    key.ratio().get(),
                    rejected.len()
                );
                self.restore(rejected);
                return Some(item);
            }
            rejected.push((key, item));
        }

        trace!("heap selector: nothing fits capacity {capacity}");
        self.restore(rejected);
        None
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for HeapSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::WeightedItem;
    use alloc::vec;

    fn weights<T: Weighted>(selector: &HeapSelector<T>) -> Vec<f64> {
        let mut weights: Vec<f64> = selector.iter().map(Weighted::weight).collect();
        weights.sort_by(f64::total_cmp);
        weights
    }

    #[test]
    fn empty_heap_misses() {
        let mut selector = HeapSelector::<WeightedItem>::initialize(Vec::new()).unwrap();
        assert_eq!(selector.get_optimal(f64::INFINITY), None);
        assert!(selector.is_empty());
    }

    #[test]
    fn miss_keeps_items_and_root_but_may_move_slots() {
        let items = vec![
            WeightedItem::new(10.0, 5.0),
            WeightedItem::new(9.0, 3.0),
            WeightedItem::new(4.0, 4.0),
            WeightedItem::new(8.0, 4.0),
        ];
        let mut selector = HeapSelector::initialize(items).unwrap();
        let root = selector.heap.peek().map(|(key, item)| (*key, *item));
        let before: Vec<WeightedItem> = selector.iter().copied().collect();
        assert_eq!(
            before,
            vec![
                WeightedItem::new(9.0, 3.0),
                WeightedItem::new(10.0, 5.0),
                WeightedItem::new(4.0, 4.0),
                WeightedItem::new(8.0, 4.0),
            ]
        );

        assert_eq!(selector.get_optimal(1.0), None);
        selector.heap.validate_invariants();
        assert_eq!(selector.heap.peek().map(|(key, item)| (*key, *item)), root);
        assert_eq!(weights(&selector), vec![3.0, 4.0, 4.0, 5.0]);

        // Refilling with `add` reorders the two equal-weight leaves.
        let after: Vec<WeightedItem> = selector.iter().copied().collect();
        assert_eq!(
            after,
            vec![
                WeightedItem::new(9.0, 3.0),
                WeightedItem::new(10.0, 5.0),
                WeightedItem::new(8.0, 4.0),
                WeightedItem::new(4.0, 4.0),
            ]
        );
    }

    #[test]
    fn rejected_items_are_put_back() {
        let items = vec![
            WeightedItem::new(90.0, 9.0),
            WeightedItem::new(80.0, 8.0),
            WeightedItem::new(2.0, 1.0),
            WeightedItem::new(1.0, 1.0),
        ];
        let mut selector = HeapSelector::initialize(items).unwrap();

        assert_eq!(selector.get_optimal(1.0), Some(WeightedItem::new(2.0, 1.0)));
        assert_eq!(weights(&selector), vec![1.0, 8.0, 9.0]);

        assert_eq!(selector.get_optimal(0.5), None);
        assert_eq!(weights(&selector), vec![1.0, 8.0, 9.0]);

        assert_eq!(selector.get_optimal(9.0), Some(WeightedItem::new(90.0, 9.0)));
        assert_eq!(selector.len(), 2);
    }
}
