use core::num::NonZero;

// Narrow under test so the full-arena path is cheap to reach.
#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Position of a tree node in the [`Arena`](super::arena::Arena).
///
/// Holds `index + 1`; a child link is an `Option<NodeId>` and the zero
/// niche stands in for "no child".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<Slot>);

impl NodeId {
    /// Largest index an id can name.
    pub(crate) const LAST_INDEX: usize = (Slot::MAX - 1) as usize;

    /// Returns the id of arena slot `index`, or `None` past [`LAST_INDEX`](Self::LAST_INDEX).
    #[inline]
    pub(crate) const fn new(index: usize) -> Option<Self> {
        if index > Self::LAST_INDEX {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let shifted = (index + 1) as Slot;
        match NonZero::new(shifted) {
            Some(shifted) => Some(Self(shifted)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
