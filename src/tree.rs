//! A BST that is balanced on demand. Building a tree from a collection (or calling
//! [`Tree::rebalance`]) gives it a minimal height, but `insert` and `delete` never
//! restructure anything beyond the path to the affected node.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Tree, TreeError};
//!
//! // Duplicates are dropped and the keys are laid out in a balanced shape.
//! let mut tree = Tree::build([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert_eq!(tree.len(), 11);
//! assert!(tree.is_balanced());
//!
//! // Inserting an existing key does nothing.
//! assert!(tree.insert(12));
//! assert!(!tree.insert(12));
//!
//! // Deleting returns the removed key.
//! assert_eq!(tree.delete(&12), Ok(12));
//! assert_eq!(tree.delete(&342), Err(TreeError::KeyNotFound));
//!
//! // Piling keys onto one side unbalances the tree until it is rebuilt.
//! for key in [400, 450, 500] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{Result, TreeError};
use crate::node::{descend, Link, Node};
use crate::sort::merge_sort;

/// A Binary Search Tree over unique keys. This can be used for inserting, finding, and
/// deleting keys, for walking them in several orders, and for rebuilding itself into a
/// balanced shape.
#[derive(Clone)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    len: usize,
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("level_order", &self.level_order())
            .finish()
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping the boxes recursively would use stack proportional to the height, which
    // unbalanced inserts can push to O(n).
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    /// Consumes the tree, yielding its keys in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        drain_in_order(self.root.take()).into_iter()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree out of `keys`. The keys may arrive in any order and may
    /// repeat; only one copy of each is kept.
    ///
    /// The sorted keys are split at their midpoint recursively, so at every node the two
    /// subtrees hold numbers of keys that differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(2));
    ///
    /// let empty = Tree::<i32>::build([]);
    /// assert!(empty.root().is_none());
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut sorted = merge_sort(keys.into_iter().collect());
        sorted.dedup();
        Self::from_sorted(sorted)
    }

    /// Builds a balanced tree from keys that are already strictly ascending.
    fn from_sorted(keys: Vec<K>) -> Self
    where
        K: Ord,
    {
        let tree = Self {
            len: keys.len(),
            root: build_branch(keys),
        };
        tree.check_order();
        tree
    }

    /// The top node of the tree, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds `key` to the tree as a new leaf. Returns `false`, leaving the tree untouched,
    /// if the key was already present.
    ///
    /// No balancing happens here; see [`Tree::rebalance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut node = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(Node::new(key)));
                self.len += 1;
                return true;
            }
        };

        loop {
            let ordering = key.cmp(&node.key);
            if ordering == Ordering::Equal {
                return false;
            }
            if node.child(ordering).is_none() {
                *node.child_mut(ordering) = Some(Box::new(Node::new(key)));
                node.check_children();
                break;
            }
            node = match node.child_mut(ordering).as_deref_mut() {
                Some(child) => child,
                None => unreachable!("the child was checked above"),
            };
        }

        self.len += 1;
        true
    }

    /// Removes the node holding `key` and returns the key. If the key isn't in the tree,
    /// [`TreeError::KeyNotFound`] is returned and the tree is unchanged.
    ///
    /// A node with two children isn't unlinked itself. It takes the key of its in-order
    /// successor (the leftmost node of its right subtree) and that successor is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(3));
    /// assert_eq!(tree.delete(&2), Err(TreeError::KeyNotFound));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<K>
    where
        K: Ord,
    {
        let removed = remove(&mut self.root, key)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Finds the node holding `key`, failing with [`TreeError::KeyNotFound`] if there
    /// isn't one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| *node.key()), Ok(3));
    /// assert!(matches!(tree.find(&42), Err(TreeError::KeyNotFound)));
    /// ```
    pub fn find(&self, key: &K) -> Result<&Node<K>>
    where
        K: Ord,
    {
        descend(self.root(), key).map(|(_, node)| node)
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_ok()
    }

    /// The height of the root, or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// How many edges lie between the root and the node holding the same key as `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::{Node, Tree, TreeError};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(tree.find(&1).unwrap()), Ok(1));
    /// assert_eq!(tree.depth(&Node::new(10)), Err(TreeError::KeyNotFound));
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Result<usize>
    where
        K: Ord,
    {
        descend(self.root(), &node.key).map(|(depth, _)| depth)
    }

    /// Whether the heights of the root's two subtrees differ by at most one. A missing
    /// subtree counts as one shorter than a leaf. Only the root is considered: subtrees
    /// further down may still be lopsided.
    pub fn is_balanced(&self) -> bool {
        let Some(root) = self.root() else {
            return true;
        };
        let height = |child: Option<&Node<K>>| child.map_or(-1, |n| n.height() as isize);

        (height(root.left()) - height(root.right())).abs() <= 1
    }

    /// Rebuilds the tree into a balanced shape holding the same keys.
    pub fn rebalance(&mut self)
    where
        K: Ord,
    {
        let keys = drain_in_order(self.root.take());
        self.root = build_branch(keys);
        self.check_order();
    }

    /// In debug builds, asserts that the keys are strictly ascending in order and that
    /// the cached length is right. This walks the whole tree so it only runs after the
    /// tree is rebuilt.
    fn check_order(&self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            let keys = self.in_order();
            assert_eq!(keys.len(), self.len);
            assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

/// Splits strictly ascending `keys` at their midpoint into a subtree root with each half
/// built into a child.
fn build_branch<K>(mut keys: Vec<K>) -> Link<K> {
    let mid = keys.len().checked_sub(1)? / 2;
    let right = keys.split_off(mid + 1);
    let key = keys.pop()?;

    Some(Box::new(Node {
        key,
        left: build_branch(keys),
        right: build_branch(right),
    }))
}

/// Deletes `key` from the subtree at `link`, relinking it in place. Nothing is touched
/// until the matching node is found.
fn remove<K>(mut link: &mut Link<K>, key: &K) -> Result<K>
where
    K: Ord,
{
    loop {
        let ordering = link
            .as_deref()
            .map(|node| key.cmp(&node.key))
            .ok_or(TreeError::KeyNotFound)?;
        if ordering == Ordering::Equal {
            break;
        }
        let Some(node) = link else {
            return Err(TreeError::KeyNotFound);
        };
        link = node.child_mut(ordering);
    }

    let node = link.as_mut().ok_or(TreeError::KeyNotFound)?;
    if node.left.is_some() && node.right.is_some() {
        let successor = detach_min(&mut node.right).ok_or(TreeError::KeyNotFound)?;
        let removed = mem::replace(&mut node.key, successor);
        node.check_children();
        return Ok(removed);
    }

    let replacement = node.left.take().or(node.right.take());
    let removed = mem::replace(link, replacement).ok_or(TreeError::KeyNotFound)?;
    if let Some(node) = link.as_deref() {
        node.check_children();
    }
    Ok(removed.key)
}

/// Unlinks the leftmost node of the subtree at `link`, putting its right child in its
/// place. Returns the unlinked key, or `None` if the subtree is empty.
fn detach_min<K>(mut link: &mut Link<K>) -> Option<K>
where
    K: Ord,
{
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let Node { key, right, .. } = *link.take()?;
    *link = right;
    if let Some(node) = link.as_deref() {
        node.check_children();
    }
    Some(key)
}

/// Takes a subtree apart, returning its keys in order.
fn drain_in_order<K>(root: Link<K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut pending = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            pending.push(node);
        }
        let Some(node) = pending.pop() else {
            return keys;
        };
        let Node { key, right, .. } = *node;
        keys.push(key);
        current = right;
    }
}
