use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use super::Selector;

/// A store with several owners, each of which can take items from it.
///
/// Every clone is another front end onto the same underlying store: an item
/// taken through one is gone for all of them. Each query runs under a single
/// exclusive borrow of the store, so a removal is never observed half done.
///
/// # Examples
///
/// ```
/// use hollow_store::{HeapSelector, Selector, SharedStore, WeightedItem};
///
/// let items = vec![WeightedItem::new(4.0, 1.0), WeightedItem::new(3.0, 1.0)];
/// let mut north = SharedStore::new(HeapSelector::initialize(items)?);
/// let mut south = north.clone();
///
/// assert_eq!(north.get_optimal(1.0), Some(WeightedItem::new(4.0, 1.0)));
/// assert_eq!(south.len(), 1);
/// assert_eq!(south.get_optimal(1.0), Some(WeightedItem::new(3.0, 1.0)));
/// assert!(north.is_empty());
/// # Ok::<(), hollow_store::Error>(())
/// ```
pub struct SharedStore<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> SharedStore<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        SharedStore {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Returns how many front ends share this store, including this one.
    #[must_use]
    pub fn front_ends(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Returns `true` if `self` and `other` are front ends of the same store.
    #[must_use]
    pub fn same_store(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Runs `f` against the shared store.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a query on the same store.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.borrow())
    }
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        SharedStore {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Selector> Selector for SharedStore<S> {
    type Item = S::Item;

    fn get_optimal(&mut self, capacity: f64) -> Option<S::Item> {
        self.inner.borrow_mut().get_optimal(capacity)
    }

    fn len(&self) -> usize {
        self.inner.borrow().len()
    }
}

impl<S: fmt::Debug> fmt::Debug for SharedStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore")
            .field("front_ends", &self.front_ends())
            .field("store", &self.inner.borrow())
            .finish()
    }
}
