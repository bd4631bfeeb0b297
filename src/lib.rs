//! This crate provides a Binary Search Tree (BST) set whose nodes know their
//! parents, so it can be walked in preorder, inorder or postorder, forwards
//! and backwards, from any node without an auxiliary stack.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. The most important invariants of
//! a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! "Less" is decided by a [`Compare`] implementation, [`Natural`] ([`Ord`])
//! unless the tree is built with another one. Values that are neither less
//! nor greater than each other are the same element, so the tree never holds
//! two of them.
//!
//! [`Tree`] does no rebalancing. Searching takes `O(height)`, and the height
//! is only `O(lg N)` when values arrive in a reasonably random order.
//!
//! ## Traversals
//!
//! Besides [`Iter`], which borrows the tree, the crate hands out [`Position`]s:
//! `Copy` tokens naming one node plus a traversal order ([`Preorder`],
//! [`Inorder`] or [`Postorder`]). Positions stay valid across every change
//! except erasing the node they name, and are how elements are erased while
//! walking.
//!
//! ```
//! use travtree::{Postorder, Tree};
//!
//! let mut tree = Tree::from([5, 3, 7, 4]);
//!
//! // Drop every odd value while walking children before parents.
//! let mut position = tree.begin_with::<Postorder>();
//! while let Some(value) = tree.get(position) {
//!     if value % 2 == 1 {
//!         position = tree.erase(position).unwrap();
//!     } else {
//!         tree.advance(&mut position);
//!     }
//! }
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&4]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod iter;
mod node;
pub mod position;
pub mod traversal;
pub mod tree;
mod util;


pub use compare::{Compare, Descending, Natural};
pub use error::PositionError;
pub use iter::{IntoIter, Iter};
pub use position::{Cursor, Position};
pub use traversal::{Inorder, Postorder, Preorder, Traversal};
pub use tree::Tree;
