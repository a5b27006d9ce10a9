use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use smallvec::SmallVec;

use super::arena::Arena;
use super::node::Node;
use super::node_id::NodeId;

/// Stack of node ids for descents and traversals. A median-built tree of
/// four billion entries is 32 levels deep, so this rarely spills.
type Path = SmallVec<[NodeId; 32]>;

/// The binary search tree behind `BalancedTree`.
///
/// Equal keys are allowed. Insertion sends a key equal to the current node to
/// the right, and removal takes the first equal node met on the way down.
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    /// Arena storing every node of the tree.
    nodes: Arena<Node<K, V>>,
    /// Id of the root node, if the tree is non-empty.
    root: Option<NodeId>,
}

impl<K, V> RawTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Builds a tree whose in-order sequence is exactly `entries`.
    ///
    /// Each range contributes its median `(lo + hi) / 2` as the subtree root,
    /// so the height is `ceil(log2(n + 1))`. Every node is linked once: Θ(n).
    pub(crate) fn from_sorted(entries: Vec<(K, V)>) -> Self {
        let len = entries.len();
        let mut tree = Self::with_capacity(len);
        let mut entries = entries.into_iter();
        tree.root = tree.build_range(&mut entries, len);
        tree
    }

    /// Builds the subtree for the next `count` entries of `entries`.
    ///
    /// Entries arrive in order, so the left range is built before the median
    /// is taken and the right range after it.
    fn build_range<I>(&mut self, entries: &mut I, count: usize) -> Option<NodeId>
    where
        I: Iterator<Item = (K, V)>,
    {
        if count == 0 {
            return None;
        }

        let left_count = count / 2;
        let left = self.build_range(entries, left_count);
        let (key, value) = entries.next().expect("`RawTree::build_range()` - ran out of entries!");
        let right = self.build_range(entries, count - left_count - 1);

        let height = 1 + self.height_of(left).max(self.height_of(right));
        Some(self.nodes.alloc(Node::with_children(key, value, left, right, height)))
    }

    /// Returns the number of entries in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no entries.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of levels in the tree (0 when empty).
    pub(crate) fn height(&self) -> usize {
        self.height_of(self.root) as usize
    }

    /// Clears all entries from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns a reference to a node by id.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id)
    }

    fn height_of(&self, id: Option<NodeId>) -> u32 {
        id.map_or(0, |id| self.nodes.get(id).height())
    }

    /// Recomputes heights from the deepest id in `path` back up to the root.
    fn refresh_heights(&mut self, path: &[NodeId]) {
        for &id in path.iter().rev() {
            let node = self.nodes.get(id);
            let height = 1 + self.height_of(node.left()).max(self.height_of(node.right()));
            self.nodes.get_mut(id).set_height(height);
        }
    }

    /// Points `parent`'s link to `old` (or the root, when `parent` is `None`) at `new`.
    fn relink(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.nodes.get_mut(parent);
                if parent.left() == Some(old) {
                    parent.set_left(new);
                } else {
                    parent.set_right(new);
                }
            }
        }
    }

    /// Returns the leftmost node.
    pub(crate) fn first(&self) -> Option<NodeId> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        Some(current)
    }

    /// Returns the rightmost node.
    pub(crate) fn last(&self) -> Option<NodeId> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        Some(current)
    }

    /// Walks the tree in reverse key order and returns the first node whose
    /// entry satisfies `pred`.
    ///
    /// Nothing left of the hit is visited, so when the greatest keys already
    /// qualify this costs O(height); when only the smallest do it costs O(n).
    pub(crate) fn find_last<F>(&self, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut stack = Path::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes.get(id).right();
            }

            let id = stack.pop()?;
            let node = self.nodes.get(id);
            if pred(node.key(), node.value()) {
                return Some(id);
            }
            current = node.left();
        }
    }

    /// Returns an in-order iterator over the tree.
    pub(crate) fn in_order(&self) -> InOrder<'_, K, V> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: Path::new(),
            remaining: self.len(),
        };
        iter.descend_left(self.root);
        iter
    }

    /// Moves every entry out of the tree in key order.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut ids = Vec::with_capacity(self.len());
        let mut stack = Path::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes.get(id).left();
            }
            let Some(id) = stack.pop() else {
                break;
            };
            ids.push(id);
            current = self.nodes.get(id).right();
        }

        ids.into_iter().map(|id| self.nodes.take(id).into_entry()).collect()
    }
}

impl<K: Ord, V> RawTree<K, V> {
    /// Searches for the first node on the root-to-leaf path whose key equals `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Inserts an entry below the node where the search for `key` falls off the tree.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let mut path = Path::new();
        let mut current = self.root;
        let mut go_left = false;
        while let Some(id) = current {
            path.push(id);
            let node = self.nodes.get(id);
            go_left = key < *node.key();
            current = if go_left { node.left() } else { node.right() };
        }

        let id = self.nodes.alloc(Node::leaf(key, value));
        match path.last() {
            None => self.root = Some(id),
            Some(&parent) if go_left => self.nodes.get_mut(parent).set_left(Some(id)),
            Some(&parent) => self.nodes.get_mut(parent).set_right(Some(id)),
        }
        self.refresh_heights(&path);
    }

    /// Removes the first node whose key equals `key` and returns its entry.
    ///
    /// A node with two children keeps its place in the tree and takes over the
    /// entry of its in-order successor, whose own node is spliced out instead.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Ancestors of every node whose height may change.
        let mut path = Path::new();
        let mut current = self.root;
        let target = loop {
            let id = current?;
            let node = self.nodes.get(id);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => break id,
            };
            path.push(id);
        };

        let node = self.nodes.get(target);
        let entry = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                path.push(target);
                let mut parent = target;
                let mut successor = right;
                while let Some(left) = self.nodes.get(successor).left() {
                    path.push(successor);
                    parent = successor;
                    successor = left;
                }

                let successor_right = self.nodes.get(successor).right();
                self.relink(Some(parent), successor, successor_right);
                let (key, value) = self.nodes.take(successor).into_entry();
                self.nodes.get_mut(target).replace_entry(key, value)
            }
            (left, right) => {
                self.relink(path.last().copied(), target, left.or(right));
                self.nodes.take(target).into_entry()
            }
        };

        self.refresh_heights(&path);
        Some(entry)
    }
}

/// In-order iterator over a [`RawTree`].
pub(crate) struct InOrder<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    stack: Path,
    remaining: usize,
}

impl<K, V> InOrder<'_, K, V> {
    fn descend_left(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes.get(id).left();
        }
    }
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = nodes.get(self.stack.pop()?);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
