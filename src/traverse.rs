//! Walking a [`Tree`] in the four classic orders.
//!
//! Each order comes in two flavors: one that collects the keys it reaches into a `Vec`,
//! and a `_with` variant that hands every [`Node`] to a visitor instead. Both are driven
//! by the same loop, which keeps an explicit stack or queue rather than recursing.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Order, Tree};
//!
//! let tree = Tree::build([1, 2, 3, 4, 5]);
//!
//! assert_eq!(tree.level_order(), vec![&3, &1, &4, &2, &5]);
//! assert_eq!(tree.traverse(Order::PostOrder), vec![&2, &1, &5, &4, &3]);
//!
//! let mut doubled = Vec::new();
//! tree.in_order_with(|node| doubled.push(node.key() * 2));
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

/// The order in which a traversal reaches the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then every node one edge down from left to right, and so
    /// on.
    LevelOrder,
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// A node's left subtree, then the node, then its right subtree. Keys come out
    /// ascending.
    InOrder,
    /// A node's left subtree, then its right subtree, then the node.
    PostOrder,
}

/// What a traversal does with each node it reaches.
enum Action<'a, 'f, K> {
    Collect(&'f mut Vec<&'a K>),
    Visit(&'f mut dyn FnMut(&'a Node<K>)),
}

impl<'a, K> Action<'a, '_, K> {
    fn apply(&mut self, node: &'a Node<K>) {
        match self {
            Self::Collect(keys) => keys.push(&node.key),
            Self::Visit(visit) => (*visit)(node),
        }
    }
}

impl<K> Tree<K> {
    /// The keys of the tree in the given order.
    pub fn traverse(&self, order: Order) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        walk(self.root(), order, &mut Action::Collect(&mut keys));
        keys
    }

    /// Calls `visit` on every node of the tree in the given order.
    pub fn traverse_with<'a, F>(&'a self, order: Order, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        walk_with(self.root(), order, visit);
    }

    /// The keys of the tree breadth first.
    pub fn level_order(&self) -> Vec<&K> {
        self.traverse(Order::LevelOrder)
    }

    /// Calls `visit` on every node breadth first.
    pub fn level_order_with<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse_with(Order::LevelOrder, visit)
    }

    /// The keys of the tree with every node ahead of its subtrees.
    pub fn pre_order(&self) -> Vec<&K> {
        self.traverse(Order::PreOrder)
    }

    /// Calls `visit` on every node ahead of its subtrees.
    pub fn pre_order_with<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse_with(Order::PreOrder, visit)
    }

    /// The keys of the tree in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.traverse(Order::InOrder)
    }

    /// Calls `visit` on every node in ascending key order.
    pub fn in_order_with<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse_with(Order::InOrder, visit)
    }

    /// The keys of the tree with every node after its subtrees.
    pub fn post_order(&self) -> Vec<&K> {
        self.traverse(Order::PostOrder)
    }

    /// Calls `visit` on every node after its subtrees.
    pub fn post_order_with<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse_with(Order::PostOrder, visit)
    }

    /// A lazy iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2]);
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Calls `visit` on every node below `root` in the given order.
pub(crate) fn walk_with<'a, K, F>(root: Option<&'a Node<K>>, order: Order, mut visit: F)
where
    F: FnMut(&'a Node<K>),
{
    walk(root, order, &mut Action::Visit(&mut visit));
}

fn walk<'a, K>(root: Option<&'a Node<K>>, order: Order, action: &mut Action<'a, '_, K>) {
    match order {
        Order::LevelOrder => {
            let mut queue: VecDeque<_> = root.into_iter().collect();
            while let Some(node) = queue.pop_front() {
                action.apply(node);
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
        Order::PreOrder => {
            let mut pending: Vec<_> = root.into_iter().collect();
            while let Some(node) = pending.pop() {
                action.apply(node);
                pending.extend(node.right());
                pending.extend(node.left());
            }
        }
        Order::InOrder => {
            let mut nodes = Iter::new(root);
            while let Some(node) = nodes.next_node() {
                action.apply(node);
            }
        }
        Order::PostOrder => {
            // Node, right, left is exactly post-order backwards.
            let mut pending: Vec<_> = root.into_iter().collect();
            let mut reversed = Vec::new();
            while let Some(node) = pending.pop() {
                reversed.push(node);
                pending.extend(node.left());
                pending.extend(node.right());
            }
            for node in reversed.into_iter().rev() {
                action.apply(node);
            }
        }
    }
}

/// An in-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, K> {
    /// Nodes whose left subtrees have been queued but which haven't been yielded yet.
    /// The top of the stack is always the next node.
    pending: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left();
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<K>> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::key)
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
