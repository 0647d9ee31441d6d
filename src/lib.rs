//! This crate exposes a Binary Search Tree (BST) which is balanced on demand rather than
//! on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path from the
//! root `Node` down to a leaf `Node`. A [`Tree`] built from a collection, or rebuilt with
//! [`Tree::rebalance`], has a height of `O(lg N)`. Plain inserts and deletes don't
//! rotate anything, so piling keys onto one side can make the height grow towards `N`
//! until the next rebalance.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree. See [`Order`] for the other traversals.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 3]);
//! tree.insert(1);
//!
//! assert_eq!(tree.in_order(), vec![&1, &3, &5, &8]);
//! assert_eq!(tree.find(&3).map(|node| node.left().is_some()), Ok(true));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod sort;
pub mod traverse;
pub mod tree;


pub use error::{Result, TreeError};
pub use node::Node;
pub use traverse::{Iter, Order};
pub use tree::Tree;
