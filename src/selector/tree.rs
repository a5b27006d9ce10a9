use core::fmt;

use alloc::vec::Vec;
use log::{debug, trace};

use super::Selector;
use crate::item::{EntryKey, key_items};
use crate::{BalancedTree, Error, Weighted};

/// Best-fit selection over a median-built binary search tree.
///
/// Building sorts the items by ratio with merge sort and links them into a
/// tree of minimum height. A query walks the tree in descending ratio order
/// and takes the first item that fits, so it touches O(log n) nodes when a
/// high-ratio item fits and O(n) when only the lowest ratios do. A miss never
/// modifies the tree.
///
/// # Examples
///
/// ```
/// use hollow_store::{Selector, TreeSelector, WeightedItem};
///
/// let mut hollow = TreeSelector::initialize(vec![
///     WeightedItem::new(10.0, 5.0),
///     WeightedItem::new(9.0, 3.0),
///     WeightedItem::new(4.0, 4.0),
/// ])?;
///
/// assert_eq!(hollow.get_optimal(2.0), None);
/// assert_eq!(hollow.get_optimal(4.0), Some(WeightedItem::new(9.0, 3.0)));
/// assert_eq!(hollow.len(), 2);
/// # Ok::<(), hollow_store::Error>(())
/// ```
pub struct TreeSelector<T> {
    tree: BalancedTree<EntryKey, T>,
}

impl<T: Weighted> TreeSelector<T> {
    /// Validates `items` and builds the tree.
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
    /// Θ(n log n)
    pub fn initialize(items: Vec<T>) -> Result<Self, Error> {
        let tree = BalancedTree::from_unsorted(key_items(items)?);
        debug!("built tree selector: {} items, height {}", tree.len(), tree.height());
        Ok(TreeSelector { tree })
    }
}

impl<T> TreeSelector<T> {
    /// Iterates over the items from the lowest ratio to the highest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tree.iter().map(|(_, item)| item)
    }

    /// Returns the height of the underlying tree.
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl<T: Weighted> Selector for TreeSelector<T> {
    type Item = T;

    fn get_optimal(&mut self, capacity: f64) -> Option<T> {
        let Some((&key, _)) = self.tree.find_last(|_, item| item.weight() <= capacity) else {
            trace!("tree selector: nothing fits capacity {capacity}");
            return None;
        };

        let item = self
            .tree
            .delete(&key)
            .expect("`TreeSelector::get_optimal()` - located entry vanished before removal!");
        trace!("tree selector: took ratio {} for capacity {capacity}", key.ratio().get());
        Some(item)
    }

    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeSelector<T> {
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

    #[test]
    fn miss_leaves_tree_untouched() {
        let items = vec![WeightedItem::new(8.0, 4.0), WeightedItem::new(3.0, 6.0)];
        let mut selector = TreeSelector::initialize(items).unwrap();
        let before = selector.tree.keys_in_order();

        assert_eq!(selector.get_optimal(3.5), None);
        assert_eq!(selector.tree.keys_in_order(), before);
        assert_eq!(selector.len(), 2);
    }

    #[test]
    fn miss_keeps_every_item_in_place() {
        let items = vec![
            WeightedItem::new(10.0, 5.0),
            WeightedItem::new(9.0, 3.0),
            WeightedItem::new(4.0, 4.0),
            WeightedItem::new(8.0, 4.0),
        ];
        let mut selector = TreeSelector::initialize(items).unwrap();
        let before: Vec<WeightedItem> = selector.iter().copied().collect();
        let height = selector.height();

        for capacity in [1.0, 2.5, 0.0] {
            assert_eq!(selector.get_optimal(capacity), None);
            assert_eq!(selector.iter().copied().collect::<Vec<_>>(), before);
            assert_eq!(selector.height(), height);
        }
    }

    #[test]
    fn ties_go_to_the_earlier_item() {
        let items = vec![(1, WeightedItem::new(4.0, 2.0)), (2, WeightedItem::new(2.0, 1.0))];
        let tagged: Vec<Tagged> = items.into_iter().map(|(tag, item)| Tagged { tag, item }).collect();
        let mut selector = TreeSelector::initialize(tagged).unwrap();

        assert_eq!(selector.get_optimal(10.0).map(|t| t.tag), Some(1));
        assert_eq!(selector.get_optimal(10.0).map(|t| t.tag), Some(2));
        assert_eq!(selector.get_optimal(10.0).map(|t| t.tag), None);
    }

    #[test]
    fn heavy_high_ratio_items_are_skipped() {
        let items = vec![
            WeightedItem::new(100.0, 10.0),
            WeightedItem::new(50.0, 10.0),
            WeightedItem::new(3.0, 1.0),
            WeightedItem::new(1.0, 1.0),
        ];
        let mut selector = TreeSelector::initialize(items).unwrap();
        assert_eq!(selector.height(), 3);
        assert_eq!(selector.get_optimal(1.0), Some(WeightedItem::new(3.0, 1.0)));
        assert_eq!(selector.get_optimal(1.0), Some(WeightedItem::new(1.0, 1.0)));
        assert_eq!(selector.get_optimal(1.0), None);
        assert_eq!(selector.get_optimal(10.0), Some(WeightedItem::new(100.0, 10.0)));
    }

    #[derive(Debug)]
    struct Tagged {
        tag: u8,
        item: WeightedItem,
    }

    impl Weighted for Tagged {
        fn value(&self) -> f64 {
            self.item.value
        }

        fn weight(&self) -> f64 {
            self.item.weight
        }
    }
}
