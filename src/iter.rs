//! Lazy traversals over an [`OrderedTree`][crate::OrderedTree]'s keys.
//!
//! Both iterators borrow the tree, so it cannot be modified while one is
//! alive. Neither recurses: [`InOrder`] keeps a stack of nodes whose left
//! subtree is still being visited and [`LevelOrder`] keeps a FIFO queue of
//! nodes waiting to be visited.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::ordered::Node;

/// Iterates over a tree's keys in ascending order. Created by
/// [`OrderedTree::in_order`][crate::OrderedTree::in_order].
#[derive(Debug)]
pub struct InOrder<'a, K> {
    nodes: &'a [Node<K>],
    /// Nodes we've descended through but not yet yielded. The top is the
    /// smallest key left.
    stack: Vec<usize>,
    len: usize,
}

/// Manual implementation of `Clone` so cloning the iterator doesn't require `K: Clone`.
impl<'a, K> Clone for InOrder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            len: self.len,
        }
    }
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(nodes: &'a [Node<K>], root: Option<usize>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            len: nodes.len(),
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<usize>) {
        while let Some(id) = node {
            self.stack.push(id);
            node = self.nodes[id].left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.push_left_spine(node.right);
        self.len -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K> ExactSizeIterator for InOrder<'a, K> {}
impl<'a, K> FusedIterator for InOrder<'a, K> {}

/// Iterates over a tree's keys breadth first, left to right within each
/// level. Created by [`OrderedTree::level_order`][crate::OrderedTree::level_order].
#[derive(Debug)]
pub struct LevelOrder<'a, K> {
    nodes: &'a [Node<K>],
    queue: VecDeque<usize>,
    len: usize,
}

impl<'a, K> Clone for LevelOrder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            queue: self.queue.clone(),
            len: self.len,
        }
    }
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(nodes: &'a [Node<K>], root: Option<usize>) -> Self {
        Self {
            nodes,
            queue: root.into_iter().collect(),
            len: nodes.len(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.queue.pop_front()?];
        // Left before right keeps each level in key order.
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        self.len -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K> ExactSizeIterator for LevelOrder<'a, K> {}
impl<'a, K> FusedIterator for LevelOrder<'a, K> {}

#[cfg(test)]
mod tests {
    use crate::OrderedTree;

    #[test]
    fn len_counts_down() {
        let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();

        let mut in_order = tree.in_order();
        let mut level_order = tree.level_order();
        assert_eq!(in_order.len(), 3);
        assert_eq!(level_order.len(), 3);

        in_order.next();
        level_order.next();
        assert_eq!(in_order.len(), 2);
        assert_eq!(level_order.len(), 2);
    }

    #[test]
    fn fused_after_exhaustion() {
        let tree: OrderedTree<_> = [1].into_iter().collect();

        let mut in_order = tree.in_order();
        assert_eq!(in_order.next(), Some(&1));
        assert_eq!(in_order.next(), None);
        assert_eq!(in_order.next(), None);

        let mut level_order = tree.level_order();
        assert_eq!(level_order.next(), Some(&1));
        assert_eq!(level_order.next(), None);
        assert_eq!(level_order.next(), None);
    }

    #[test]
    fn repeated_traversals_agree() {
        let tree: OrderedTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();

        assert!(tree.in_order().eq(tree.in_order()));
        assert!(tree.level_order().eq(tree.level_order()));
        assert_eq!(
            tree.level_order().copied().collect::<Vec<_>>(),
            [8, 3, 10, 1, 6, 14, 4, 7, 13]
        );
    }

    #[test]
    fn cloned_iterator_resumes_independently() {
        let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();

        let mut iter = tree.in_order();
        iter.next();
        let rest: Vec<_> = iter.clone().collect();

        assert_eq!(rest, [&2, &3]);
        assert_eq!(iter.collect::<Vec<_>>(), [&2, &3]);
    }
}
