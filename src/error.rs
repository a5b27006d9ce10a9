use thiserror::Error;

/// Errors reported while building or mutating a store.
///
/// A store that simply has nothing to offer answers with `None` instead;
/// these variants are for input that cannot be stored and for removals
/// that name an entry the store does not hold.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// The input list was empty and the configuration requires at least one item.
    #[error("a store cannot be built from an empty item list")]
    EmptyInput,
    /// An item's weight was zero, negative or not finite, so it has no ratio.
    #[error("item {index} has weight {weight}; weights must be finite and positive")]
    InvalidWeight { index: usize, weight: f64 },
    /// An item's value was negative or not finite, or its ratio overflowed.
    #[error("item {index} has value {value}; values must be finite and non-negative")]
    InvalidValue { index: usize, value: f64 },
    /// A delete named a key that is not in the tree.
    #[error("key not found")]
    KeyNotFound,
}
