//! The vertices of a [`Tree`][crate::Tree].

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::error::{Result, TreeError};
use crate::traverse::{walk_with, Order};

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` holds a key and exclusively owns up to two children. Every key in the left
/// subtree is smaller than this node's key and every key in the right subtree is larger.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Clone for Node<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            left: clone_link(&self.left),
            right: clone_link(&self.right),
        }
    }
}

/// Only shows the keys of the direct children so formatting a tall subtree stays shallow.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`. A node created this way doesn't belong to any tree
    /// until it is inserted by key.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, whose subtree holds only smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, whose subtree holds only larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child a key with the given ordering relative to this node's key belongs under.
    pub(crate) fn child(&self, ordering: Ordering) -> &Link<K> {
        match ordering {
            Ordering::Less => &self.left,
            _ => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, ordering: Ordering) -> &mut Link<K> {
        match ordering {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    /// In debug builds, asserts that this node's direct children are on the correct side
    /// of its key.
    pub(crate) fn check_children(&self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(left.key < self.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has
    /// a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Node, Tree};
    ///
    /// assert_eq!(Node::new(10).height(), 0);
    ///
    /// let tree = Tree::build([2, 1, 3, 4]);
    /// assert_eq!(tree.root().map(|root| root.height()), Some(2));
    /// ```
    pub fn height(&self) -> usize {
        // Walk level by level so a degenerate tree can't blow the stack.
        let mut height = 0;
        let mut level = VecDeque::from([self]);
        loop {
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left());
                    level.extend(node.right());
                }
            }
            if level.is_empty() {
                return height;
            }
            height += 1;
        }
    }

    /// The number of edges from this node down to the node holding the same key as
    /// `node`. Fails with [`TreeError::KeyNotFound`] if no such node is below `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Node, Tree, TreeError};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.depth_of(root), Ok(0));
    /// assert_eq!(root.depth_of(&Node::new(3)), Ok(1));
    /// assert_eq!(root.depth_of(&Node::new(10)), Err(TreeError::KeyNotFound));
    /// ```
    pub fn depth_of(&self, node: &Self) -> Result<usize>
    where
        K: Ord,
    {
        descend(Some(self), &node.key).map(|(depth, _)| depth)
    }
}

/// Copies a subtree bottom up. Every node is built after its children, which are popped
/// off `built` right first since post-order pushed them left first.
fn clone_link<K>(link: &Link<K>) -> Link<K>
where
    K: Clone,
{
    let mut built: Vec<Box<Node<K>>> = Vec::new();
    walk_with(link.as_deref(), Order::PostOrder, |node| {
        let right = node.right.as_ref().and_then(|_| built.pop());
        let left = node.left.as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node {
            key: node.key.clone(),
            left,
            right,
        }));
    });
    built.pop()
}

/// Follows `key` down from `root` by comparison. Returns the matching node along with how
/// many edges were walked to reach it.
pub(crate) fn descend<'a, K>(root: Option<&'a Node<K>>, key: &K) -> Result<(usize, &'a Node<K>)>
where
    K: Ord,
{
    let mut current = root;
    let mut depth = 0;
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left(),
            Ordering::Equal => return Ok((depth, node)),
            Ordering::Greater => node.right(),
        };
        depth += 1;
    }

    Err(TreeError::KeyNotFound)
}
