use core::cmp::Ordering;

use alloc::vec::Vec;
use log::warn;

use crate::Error;

/// Something with a value and a weight that a store can hold.
///
/// Stores order items by [`ratio`](Weighted::ratio) and test them against a
/// capacity with [`weight`](Weighted::weight).
pub trait Weighted {
    /// The item's worth. Must be finite and non-negative.
    fn value(&self) -> f64;

    /// The item's cost against a capacity. Must be finite and positive.
    fn weight(&self) -> f64;

    /// Value per unit of weight.
    fn ratio(&self) -> f64 {
        self.value() / self.weight()
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn value(&self) -> f64 {
        (**self).value()
    }

    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// A bare value/weight pair.
///
/// # Examples
///
/// ```
/// use hollow_store::{Weighted, WeightedItem};
///
/// let gem = WeightedItem::new(9.0, 3.0);
/// assert_eq!(gem.ratio(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedItem {
    pub value: f64,
    pub weight: f64,
}

impl WeightedItem {
    /// Makes an item worth `value` that weighs `weight`.
    #[must_use]
    pub const fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

impl Weighted for WeightedItem {
    fn value(&self) -> f64 {
        self.value
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// A finite, non-negative value-to-weight ratio with a total order.
///
/// # Examples
///
/// ```
/// use hollow_store::Ratio;
///
/// assert!(Ratio::new(10.0, 5.0) < Ratio::new(9.0, 3.0));
/// assert_eq!(Ratio::new(1.0, 0.0), None);
/// assert_eq!(Ratio::new(-1.0, 2.0), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Ratio(f64);

impl Ratio {
    /// Returns `value / weight`, or `None` unless `weight` is finite and
    /// positive, `value` is finite and non-negative, and the quotient is finite.
    #[must_use]
    pub fn new(value: f64, weight: f64) -> Option<Self> {
        if weight <= 0.0 || !weight.is_finite() || value < 0.0 || !value.is_finite() {
            return None;
        }
        let ratio = value / weight;
        // `+ 0.0` folds -0.0 into 0.0 so both order the same.
        ratio.is_finite().then_some(Self(ratio + 0.0))
    }

    /// Returns the ratio as a plain `f64`.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Key of a stored item: its ratio, then its position in the input list.
///
/// Among equal ratios the item supplied earlier is the greater key, so both
/// store variants hand out tied items first-come first-served.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct EntryKey {
    ratio: Ratio,
    seq: usize,
}

impl EntryKey {
    pub(crate) const fn ratio(self) -> Ratio {
        self.ratio
    }
}

impl PartialOrd for EntryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ratio.cmp(&other.ratio).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Validates `items` and pairs each one with its key.
pub(crate) fn key_items<T: Weighted>(items: Vec<T>) -> Result<Vec<(EntryKey, T)>, Error> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let (value, weight) = (item.value(), item.weight());
            if weight <= 0.0 || !weight.is_finite() {
                warn!("rejecting item {index}: weight {weight}");
                return Err(Error::InvalidWeight { index, weight });
            }
            let Some(ratio) = Ratio::new(value, weight) else {
                warn!("rejecting item {index}: value {value} over weight {weight}");
                return Err(Error::InvalidValue { index, value });
            };
            Ok((EntryKey { ratio, seq: index }, item))
        })
        .collect()
}
