use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::io;

use crate::error::AvlError;
use crate::types::Comparator;
use crate::util::{first, last, release};

use super::iterator::{AvlIterator, Iter};
use super::types::AvlNode;
use super::util;

fn default_comparator<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Ordered collection kept height-balanced after every mutation.
///
/// Values comparing equal are all kept: a new value is placed after the
/// equal ones already present. [`remove`](Self::remove) and
/// [`contains`](Self::contains) act on whichever equal node the search
/// reaches first.
///
/// Nodes are addressed by `u32` arena index, which caps a tree at
/// `u32::MAX` elements.
pub struct AvlTree<T, C = Comparator<T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    arena: Vec<AvlNode<T>>,
}

impl<T: Ord> AvlTree<T, Comparator<T>> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, default_comparator::<T>)
    }
}

impl<T: Ord> Default for AvlTree<T, Comparator<T>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            arena: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, value: T) {
        debug_assert!(self.arena.len() < u32::MAX as usize, "arena index overflow");
        let node = self.arena.len() as u32;
        self.arena.push(AvlNode::new(value));
        self.root = util::insert(&mut self.arena, self.root, node, &self.comparator);
        self.size += 1;
    }

    /// Removes one value comparing equal to `value`. Returns `false` if there
    /// is none, leaving the tree untouched.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Like [`remove`](Self::remove), but hands back the stored value.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let node = util::find(&self.arena, self.root, value, &self.comparator)?;
        let root = util::remove(&mut self.arena, self.root, node);
        let (root, released) = release(&mut self.arena, root, node);
        self.root = root;
        self.size -= 1;
        Some(released.v)
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.arena, self.root, value, &self.comparator).is_some()
    }

    pub fn min(&self) -> Result<&T, AvlError> {
        first(&self.arena, self.root)
            .map(|i| &self.arena[i as usize].v)
            .ok_or(AvlError::EmptyTree)
    }

    pub fn max(&self) -> Result<&T, AvlError> {
        last(&self.arena, self.root)
            .map(|i| &self.arena[i as usize].v)
            .ok_or(AvlError::EmptyTree)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    /// Value stored at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.map(|i| &self.arena[i as usize].v)
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    /// Indexed in-order walk; see [`AvlIterator`].
    pub fn iterator(&self) -> AvlIterator<'_, T> {
        AvlIterator::new(&self.arena, self.root, self.size)
    }

    /// Values in ascending order. Each call starts a fresh walk.
    pub fn in_order(&self) -> Iter<'_, T> {
        Iter::new(self.iterator())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.in_order().cloned().collect()
    }

    /// Checks every structural invariant, including that the cached size
    /// matches the number of reachable nodes.
    pub fn assert_valid(&self) -> Result<(), String> {
        let count = util::assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        if count != self.size {
            return Err(format!("Size mismatch: {} cached, {count} reachable", self.size));
        }
        if self.arena.len() != self.size {
            return Err(format!(
                "Arena holds {} nodes for {} elements",
                self.arena.len(),
                self.size
            ));
        }
        Ok(())
    }

    /// Structural dump showing each node with its cached height.
    pub fn print(&self) -> String
    where
        T: Debug,
    {
        format!("AvlTree\n{}", util::print::<T, _>(&self.arena, self.root, ""))
    }

    /// Writes the values in ascending order, one per line.
    pub fn write_in_order<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        for value in self.in_order() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}

impl<T, C> Debug for AvlTree<T, C>
where
    T: Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T, Comparator<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
