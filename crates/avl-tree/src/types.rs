//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena owned by the tree. Each link
//! is an `Option<u32>` index into that arena, so the parent back-reference
//! never owns anything: only reachability from the root through `l` / `r`
//! decides which nodes belong to the tree.

use std::cmp::Ordering;

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Read access to the element a node stores.
pub trait ValueNode<T>: Node {
    fn value(&self) -> &T;
}

/// Default comparator type used by [`crate::AvlTree`].
pub type Comparator<T> = fn(&T, &T) -> Ordering;
