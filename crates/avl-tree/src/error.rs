use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AvlError {
    /// `min` / `max` was queried on a tree with no elements.
    #[error("tree is empty")]
    EmptyTree,
}
