//! A growable, unbalanced BST whose nodes live in an arena owned by the tree.
//!
//! Each node is stored in a `Vec` and refers to its children by index. The
//! tree owns the `Vec` so the whole node graph is dropped with the tree and no
//! node can be shared outside of it. Nodes are only ever appended: a node's
//! key never changes after insertion and a child link is only written while it
//! is still empty.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.in_order().next(), None);
//!
//! tree.insert(5);
//! assert!(tree.contains(&5));
//!
//! // Duplicates are kept rather than overwritten.
//! tree.insert(5);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [&5, &5]);
//! ```

use std::cmp::Ordering;
use std::collections::{TryReserveError, VecDeque};
use std::fmt;

use log::{debug, trace};

use crate::compare::{Compare, Natural};
use crate::error::InsertError;
use crate::iter::{InOrder, LevelOrder};

/// An ordered Binary Search Tree. Keys are ordered by the comparator `C` and
/// equal keys are kept, each one stored to the left of the earlier ones.
///
/// The tree never rebalances, so its shape is fully determined by the order
/// in which keys were inserted.
#[derive(Clone)]
pub struct OrderedTree<K, C = Natural> {
    /// Every node ever inserted. Indices into this are stable since nothing is removed.
    nodes: Vec<Node<K>>,
    root: Option<usize>,
    compare: C,
}

/// A key and the arena indices of its children.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// A link in the tree that a new node can be attached to. The root link is
/// addressed the same way as a child link so insertion has one code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Root,
    Left(usize),
    Right(usize),
}

impl<K> Default for OrderedTree<K, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> OrderedTree<K, Natural> {
    /// Generates a new, empty `OrderedTree` ordered by `K`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Generates a new, empty `OrderedTree` with room for `capacity` keys before
    /// it needs to allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, C> OrderedTree<K, C> {
    /// Generates a new, empty `OrderedTree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 3, 2]);
    ///
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            compare,
        }
    }

    /// Like [`with_comparator`][Self::with_comparator] but with room for
    /// `capacity` keys.
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
            compare,
        }
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// How many keys have been inserted.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no key has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has height 0 and a lone
    /// root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let balanced: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// let list: OrderedTree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(list.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = VecDeque::new();
        queue.extend(self.root.map(|root| (root, 1)));

        while let Some((id, depth)) = queue.pop_front() {
            height = height.max(depth);
            let node = &self.nodes[id];
            queue.extend(node.left.map(|left| (left, depth + 1)));
            queue.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// The smallest key, i.e. the first key of [`in_order`][Self::in_order].
    pub fn min(&self) -> Option<&K> {
        let mut id = self.root?;
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        Some(&self.nodes[id].key)
    }

    /// The largest key, i.e. the last key of [`in_order`][Self::in_order].
    pub fn max(&self) -> Option<&K> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        Some(&self.nodes[id].key)
    }

    /// Iterates over the keys in ascending order. Equal keys are yielded in
    /// reverse insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 20, 17, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [4, 5, 10, 15, 17, 20]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(&self.nodes, self.root)
    }

    /// Same as [`in_order`][Self::in_order].
    pub fn iter(&self) -> InOrder<'_, K> {
        self.in_order()
    }

    /// Iterates over the keys breadth first: the root, then every node one
    /// level down from left to right, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 5, 15, 20, 17, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [10, 5, 15, 4, 20, 17]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(&self.nodes, self.root)
    }

    fn link(&self, slot: Slot) -> Option<usize> {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes[parent].left,
            Slot::Right(parent) => self.nodes[parent].right,
        }
    }

    fn link_mut(&mut self, slot: Slot) -> &mut Option<usize> {
        match slot {
            Slot::Root => &mut self.root,
            Slot::Left(parent) => &mut self.nodes[parent].left,
            Slot::Right(parent) => &mut self.nodes[parent].right,
        }
    }
}

impl<K, C> OrderedTree<K, C>
where
    C: Compare<K>,
{
    /// Inserts `key` into the tree, failing only if there is no memory for the
    /// new node. On failure the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.try_insert(1)?;
    /// tree.try_insert(1)?;
    ///
    /// assert_eq!(tree.len(), 2);
    /// # Ok::<(), ordered_tree::InsertError>(())
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<(), InsertError> {
        self.try_insert_with(key, |nodes| nodes.try_reserve(1))
    }

    /// Inserts `key` after `reserve` has made room for its node.
    fn try_insert_with<R>(&mut self, key: K, reserve: R) -> Result<(), InsertError>
    where
        R: FnOnce(&mut Vec<Node<K>>) -> Result<(), TryReserveError>,
    {
        let slot = self.vacant_slot(&key);
        // Nothing may be linked before the reservation succeeds or a failed
        // insert would leave a link pointing past the end of `nodes`.
        if let Err(e) = reserve(&mut self.nodes) {
            debug!("no room for node {} at {:?}: {}", self.nodes.len(), slot, e);
            return Err(e.into());
        }
        self.attach(slot, key);
        Ok(())
    }

    /// Inserts `key` into the tree. Keys equal to one already in the tree are
    /// stored in its left subtree.
    ///
    /// # Panics
    ///
    /// Like [`Vec::push`], panics if the node count overflows `isize::MAX` bytes
    /// and aborts if allocation fails. Use [`try_insert`][Self::try_insert] to
    /// handle allocation failure.
    pub fn insert(&mut self, key: K) {
        let slot = self.vacant_slot(&key);
        self.attach(slot, key);
    }

    /// Whether some key in the tree compares equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Potentially finds a stored key that compares equal to `key`. With
    /// duplicates, the one inserted first is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'a'));
    /// tree.insert((1, 'b'));
    ///
    /// assert_eq!(tree.find(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(tree.find(&(2, 'a')), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match self.compare.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Descends from the root to the empty link `key` belongs in.
    fn vacant_slot(&self, key: &K) -> Slot {
        let mut slot = Slot::Root;
        while let Some(id) = self.link(slot) {
            slot = match self.compare.compare(key, &self.nodes[id].key) {
                Ordering::Less | Ordering::Equal => Slot::Left(id),
                Ordering::Greater => Slot::Right(id),
            };
        }
        slot
    }

    /// Stores `key` as a new node and links it into the empty `slot`.
    fn attach(&mut self, slot: Slot, key: K) {
        let id = self.nodes.len();
        self.nodes.push(Node::new(key));
        let link = self.link_mut(slot);
        debug_assert!(link.is_none(), "{:?} is already occupied", slot);
        *link = Some(id);
        trace!("attached node {} at {:?}", id, slot);

        if cfg!(debug_assertions) {
            // Only the structure is checked here. Comparing again would panic on
            // comparators that don't answer consistently.
            match slot {
                Slot::Root => assert_eq!(id, 0),
                Slot::Left(parent) | Slot::Right(parent) => assert!(parent < id),
            }
        }
    }
}

impl<K, C> fmt::Debug for OrderedTree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len())
            .field("keys", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> FromIterator<K> for OrderedTree<K, Natural>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for OrderedTree<K, C>
where
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C> Extend<&'a K> for OrderedTree<K, C>
where
    K: Copy + 'a,
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, K, C> IntoIterator for &'a OrderedTree<K, C> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
