//! This crate is the data structure behind an interactive Binary Search Tree (BST)
//! visualizer. It owns the tree, performs insertions, deletions and searches, and
//! hands back the nodes, paths and traversal sequences a renderer needs to draw and
//! animate the tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants no value can appear twice, searching for a value takes
//! `O(height)`, and visiting the left subtree, then the subtree root, then the right
//! subtree yields the values in sorted order. This tree does not rebalance itself, so
//! inserting sorted input produces a list-shaped tree whose height equals its length.
//! [`Tree::balance_factor`](engine::Tree::balance_factor) reports how lopsided the
//! root is.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Order, Tree};
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! let values = |nodes: Vec<&bst_engine::Node<i32>>| {
//!     nodes.into_iter().map(|n| *n.value()).collect::<Vec<_>>()
//! };
//! assert_eq!(values(tree.traverse(Order::Inorder)), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.balance_factor(), 1);
//!
//! assert!(tree.delete(&3));
//! assert_eq!(values(tree.inorder()), [1, 4, 5, 8]);
//! assert_eq!(tree.len(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod engine;
pub mod errors;
pub mod input;
pub mod traversal;

pub use engine::{Node, NodeId, Search, Stats, Tree};
pub use errors::{Error, Result};
pub use input::InputRange;
pub use traversal::Order;
