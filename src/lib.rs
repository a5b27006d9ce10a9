//! Best-fit ratio stores for Rust.
//!
//! This crate answers one query over a fixed set of weighted items, over and
//! over: *among the items no heavier than a capacity, remove and return the
//! one with the highest value/weight ratio.* Two interchangeable stores
//! answer it:
//!
//! - [`TreeSelector`] - items live in a [`BalancedTree`], a binary search tree
//!   built at minimum height from [`merge_sort`]ed input. A query walks down
//!   from the highest ratio and stops at the first item that fits.
//! - [`HeapSelector`] - items live in a [`MaxHeap`]. A query pops the top
//!   until something fits and puts the rejects back.
//!
//! # Example
//!
//! ```
//! use hollow_store::{Selector, Store, StoreConfig, StoreKind, WeightedItem};
//!
//! let items = vec![
//!     WeightedItem::new(10.0, 5.0), // ratio 2
//!     WeightedItem::new(9.0, 3.0),  // ratio 3
//!     WeightedItem::new(4.0, 4.0),  // ratio 1
//! ];
//!
//! for kind in [StoreKind::Tree, StoreKind::Heap] {
//!     let config = StoreConfig::default().with_kind(kind);
//!     let mut hollow = Store::build(&config, items.clone())?;
//!
//!     // Nothing weighs 2 or less.
//!     assert_eq!(hollow.get_optimal(2.0), None);
//!     assert_eq!(hollow.len(), 3);
//!
//!     // Ratio 2 is too heavy for a capacity of 4, ratio 3 is not.
//!     assert_eq!(hollow.get_optimal(4.0), Some(WeightedItem::new(9.0, 3.0)));
//!     assert_eq!(hollow.len(), 2);
//! }
//! # Ok::<(), hollow_store::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Deterministic ties** - Equal ratios are handed out in input order by both stores
//! - **`serde`** - Optional `Serialize`/`Deserialize` for [`StoreConfig`] and [`WeightedItem`]
//!
//! # Logging
//!
//! Construction and queries report through the [`log`] facade at `debug` and
//! `trace` level; rejected items are reported at `warn`. Install any logger
//! to see them.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod config;
mod error;
mod item;
mod raw;

pub mod balanced_tree;
pub mod max_heap;
pub mod merge_sort;
pub mod selector;

pub use balanced_tree::BalancedTree;
pub use config::{StoreConfig, StoreKind};
pub use error::Error;
pub use item::{Ratio, Weighted, WeightedItem};
pub use max_heap::MaxHeap;
pub use merge_sort::merge_sort;
pub use selector::{HeapSelector, Selector, SharedStore, Store, TreeSelector};
