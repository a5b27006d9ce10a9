use alloc::vec::Vec;
use log::debug;

use super::{HeapSelector, Selector, TreeSelector};
use crate::{Error, StoreConfig, StoreKind, Weighted};

/// Either selector, chosen when the store is built.
///
/// # Examples
///
/// ```
/// use hollow_store::{Selector, Store, StoreConfig, StoreKind, WeightedItem};
///
/// let items = vec![WeightedItem::new(6.0, 2.0), WeightedItem::new(5.0, 1.0)];
/// let config = StoreConfig::default().with_kind(StoreKind::Heap);
///
/// let mut store = Store::build(&config, items)?;
/// assert_eq!(store.kind(), StoreKind::Heap);
/// assert_eq!(store.get_optimal(1.5), Some(WeightedItem::new(5.0, 1.0)));
/// # Ok::<(), hollow_store::Error>(())
/// ```
#[derive(Debug)]
pub enum Store<T> {
    Tree(TreeSelector<T>),
    Heap(HeapSelector<T>),
}

impl<T: Weighted> Store<T> {
    /// Builds the selector named by `config.kind` from `items`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `items` is empty and `config.allow_empty` is
    /// false, or the validation errors of
    /// [`TreeSelector::initialize`] / [`HeapSelector::initialize`].
    pub fn build(config: &StoreConfig, items: Vec<T>) -> Result<Self, Error> {
        if items.is_empty() && !config.allow_empty {
            debug!("refusing to build an empty {:?} store", config.kind);
            return Err(Error::EmptyInput);
        }

        Ok(match config.kind {
            StoreKind::Tree => Store::Tree(TreeSelector::initialize(items)?),
            StoreKind::Heap => Store::Heap(HeapSelector::initialize(items)?),
        })
    }
}

impl<T> Store<T> {
    #[must_use]
    pub const fn kind(&self) -> StoreKind {
        match self {
            Store::Tree(_) => StoreKind::Tree,
            Store::Heap(_) => StoreKind::Heap,
        }
    }
}

impl<T: Weighted> Selector for Store<T> {
    type Item = T;

    fn get_optimal(&mut self, capacity: f64) -> Option<T> {
        match self {
            Store::Tree(tree) => tree.get_optimal(capacity),
            Store::Heap(heap) => heap.get_optimal(capacity),
        }
    }

    fn len(&self) -> usize {
        match self {
            Store::Tree(tree) => tree.len(),
            Store::Heap(heap) => heap.len(),
        }
    }
}

impl<T> From<TreeSelector<T>> for Store<T> {
    fn from(selector: TreeSelector<T>) -> Self {
        Store::Tree(selector)
    }
}

impl<T> From<HeapSelector<T>> for Store<T> {
    fn from(selector: HeapSelector<T>) -> Self {
        Store::Heap(selector)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::WeightedItem;

    #[test]
    fn empty_input_follows_config() {
        let strict = StoreConfig::default().with_allow_empty(false);
        assert_eq!(
            Store::<WeightedItem>::build(&strict, Vec::new()).err(),
            Some(Error::EmptyInput)
        );

        for kind in [StoreKind::Tree, StoreKind::Heap] {
            let config = StoreConfig::default().with_kind(kind);
            let mut store = Store::<WeightedItem>::build(&config, Vec::new()).unwrap();
            assert_eq!(store.kind(), kind);
            assert!(store.is_empty());
            assert_eq!(store.get_optimal(100.0), None);
        }
    }
}
