//! This crate exposes an ordered set of distinct keys stored in an unbalanced
//! Binary Search Tree (BST) whose nodes exclusively own their children.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances, so
//! the height is whatever the insertion order makes it: `O(lg N)` for a random
//! order and `N` for a sorted one.
//!
//! ## Ownership
//!
//! Each child slot is an `Option<Box<Node>>`. A subtree is reachable only
//! through the slot holding it, so deleting a node with a single child just
//! moves that child's box into the parent's slot, and dropping a slot drops
//! everything beneath it.
//!
//! ## Rejected keys
//!
//! [`Tree::insert`] and [`Tree::delete`] quietly do nothing for a key that is
//! already present or missing, respectively. [`Tree::try_insert`] and
//! [`Tree::try_delete`] report the same situations as a [`TreeError`]. In
//! every case a rejected call leaves the tree untouched.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod tree;


pub use error::TreeError;
pub use tree::Tree;
