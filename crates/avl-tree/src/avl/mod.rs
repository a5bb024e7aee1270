//! Height-balanced (AVL) binary search tree.
//!
//! [`util`] holds the balancing engine as free functions over an arena of
//! [`AvlNodeLike`] nodes; [`AvlTree`] owns such an arena and exposes the
//! ordered-set API on top of it.

pub mod iterator;
pub mod tree;
pub mod types;
pub mod util;

pub use iterator::{AvlIterator, Iter};
pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, find, insert, print, rebalance, remove, rotate_left, rotate_right};
