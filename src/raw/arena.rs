use alloc::vec::Vec;

use super::node_id::NodeId;

/// Slot storage for tree nodes.
///
/// Freed slots are recycled before the backing vector grows, so a tree that
/// only ever shrinks after construction never reallocates.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        if let Some(id) = self.vacant.pop() {
            self.slots[id.index()] = Some(element);
            return id;
        }

        let id = NodeId::new(self.slots.len()).expect("`Arena::alloc()` - arena is full!");
        self.slots.push(Some(element));
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.index()].as_ref().expect("`Arena::get()` - `id` is vacant!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.index()].as_mut().expect("`Arena::get_mut()` - `id` is vacant!")
    }

    /// Moves the element out and marks its slot for reuse.
    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let element = self.slots[id.index()].take().expect("`Arena::take()` - `id` is vacant!");
        self.vacant.push(id);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vacant_slots_are_reused() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        assert_eq!(arena.take(a), 'a');
        assert_eq!(arena.len(), 1);

        let c = arena.alloc('c');
        assert_eq!(c, a);
        assert_eq!(*arena.get(b), 'b');
        assert_eq!(*arena.get(c), 'c');
        assert!(arena.capacity() >= 2);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is full!")]
    fn alloc_past_the_last_slot_panics() {
        let mut arena = Arena::with_capacity(NodeId::LAST_INDEX + 1);
        for _ in 0..=NodeId::LAST_INDEX {
            arena.alloc(());
        }
        arena.alloc(());
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `id` is vacant!")]
    fn reading_a_taken_slot_panics() {
        let mut arena = Arena::new();
        let id = arena.alloc(7u8);
        arena.take(id);
        let _ = arena.get(id);
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Overwrite(usize, u32),
        Take(usize),
        Clear,
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            10 => any::<u32>().prop_map(Operation::Alloc),
            4 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Overwrite(which, value)),
            6 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }

    proptest! {
        #[test]
        fn arena_tracks_live_elements(operations in prop::collection::vec(operation(), 0..256)) {
            let mut live: Vec<(NodeId, u32)> = Vec::new();
            let mut arena = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => live.push((arena.alloc(value), value)),
                    Operation::Overwrite(which, value) if !live.is_empty() => {
                        let slot = which % live.len();
                        *arena.get_mut(live[slot].0) = value;
                        live[slot].1 = value;
                    }
                    Operation::Take(which) if !live.is_empty() => {
                        let (id, expected) = live.swap_remove(which % live.len());
                        prop_assert_eq!(arena.take(id), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        live.clear();
                    }
                    Operation::Overwrite(..) | Operation::Take(_) => {}
                }

                prop_assert_eq!(arena.len(), live.len());
                for &(id, value) in &live {
                    prop_assert_eq!(*arena.get(id), value);
                }
            }
        }
    }
}
