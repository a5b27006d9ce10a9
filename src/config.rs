/// Which structure backs a [`Store`](crate::Store).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StoreKind {
    /// Median-built binary search tree; see [`TreeSelector`](crate::TreeSelector).
    #[default]
    Tree,
    /// Array-backed max-heap; see [`HeapSelector`](crate::HeapSelector).
    Heap,
}

/// Options for [`Store::build`](crate::Store::build).
///
/// # Examples
///
/// ```
/// use hollow_store::{StoreConfig, StoreKind};
///
/// let config = StoreConfig::default().with_kind(StoreKind::Heap).with_allow_empty(false);
/// assert_eq!(config.kind, StoreKind::Heap);
/// assert!(!config.allow_empty);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoreConfig {
    /// The structure to build.
    pub kind: StoreKind,
    /// Whether an empty item list yields an empty store (`true`) or
    /// [`Error::EmptyInput`](crate::Error::EmptyInput) (`false`).
    pub allow_empty: bool,
}

impl StoreConfig {
    /// Returns the config with `kind` as the store variant.
    #[must_use]
    pub const fn with_kind(mut self, kind: StoreKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the config with `allow_empty` set.
    #[must_use]
    pub const fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Tree,
            allow_empty: true,
        }
    }
}
