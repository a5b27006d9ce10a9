//! Best-fit selection: take the item with the highest value/weight ratio
//! among those no heavier than a capacity.
//!
//! Two interchangeable stores answer the same query:
//!
//! - [`TreeSelector`] keeps items in a [`BalancedTree`](crate::BalancedTree)
//!   and walks it from the highest ratio down until an item fits.
//! - [`HeapSelector`] keeps items in a [`MaxHeap`](crate::MaxHeap), pops
//!   items that are too heavy into a side buffer until one fits, then pushes
//!   the buffer back.
//!
//! Both key items by ratio and then by input position (earlier wins a tie),
//! so the same items and the same capacities produce the same picks from
//! either store. [`Store`] chooses between them at runtime, and
//! [`SharedStore`] lets several owners draw from one store.

mod heap;
mod shared;
mod store;
mod tree;

pub use heap::HeapSelector;
pub use shared::SharedStore;
pub use store::Store;
pub use tree::TreeSelector;

/// A collection that gives up its best-fitting item on request.
pub trait Selector {
    /// The item type handed out.
    type Item;

    /// Removes and returns the item with the highest ratio whose weight is at
    /// most `capacity`.
    ///
    /// Returns `None`, leaving every item in place, when the collection is
    /// empty or every item is heavier than `capacity`.
    fn get_optimal(&mut self, capacity: f64) -> Option<Self::Item>;

    /// Returns the number of items left.
    fn len(&self) -> usize;

    /// Returns `true` if no items are left.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
