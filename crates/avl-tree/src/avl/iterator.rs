use std::iter::FusedIterator;

use super::types::AvlNode;

/// Ascending in-order walk driven by an explicit stack of ancestors.
///
/// Yields each value together with its 0-based position. `None` marks the
/// end of the sequence. The iterator borrows the tree, so the tree cannot be
/// mutated while a walk is in progress.
pub struct AvlIterator<'a, T> {
    arena: &'a [AvlNode<T>],
    stack: Vec<u32>,
    index: usize,
    size: usize,
}

impl<'a, T> AvlIterator<'a, T> {
    pub(crate) fn new(arena: &'a [AvlNode<T>], root: Option<u32>, size: usize) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            index: 0,
            size,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = self.arena[i as usize].l;
        }
    }

    /// Number of values yielded so far.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a, T> Iterator for AvlIterator<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.size {
            return None;
        }
        let node = self.stack.pop()?;
        let arena = self.arena;
        self.push_left_spine(arena[node as usize].r);

        let index = self.index;
        self.index += 1;
        Some((index, &arena[node as usize].v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.size - self.index;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for AvlIterator<'_, T> {}

impl<T> FusedIterator for AvlIterator<'_, T> {}

/// Ascending values of an [`AvlTree`](super::AvlTree).
pub struct Iter<'a, T> {
    inner: AvlIterator<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: AvlIterator<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
