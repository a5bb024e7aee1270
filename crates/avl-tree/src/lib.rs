//! Arena-backed AVL tree.
//!
//! An ordered collection over any totally ordered value type that keeps
//! `|height(right) - height(left)| <= 1` at every node after each insertion
//! and removal, restoring it with single and double rotations on an upward
//! rebalance walk.
//!
//! Instead of raw pointers, every link is an `Option<u32>` index into a
//! `Vec` arena owned by the tree. Child links define the structure; the
//! parent link is a lookup aid for the rebalance walk and owns nothing.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`ValueNode`], [`Comparator`] |
//! [`util`] | `first`, `last`, `next`, `replace_child`, `release` |
//! [`avl::util`] | rotations, rebalance walk, `find` / `insert` / `remove` |
//! [`avl`] | [`AvlTree`], [`AvlIterator`] |
//! [`error`] | [`AvlError`] |

pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{AvlIterator, AvlNode, AvlTree, Iter};
pub use error::AvlError;
pub use types::{Comparator, Node, ValueNode};
