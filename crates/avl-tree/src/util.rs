//! Link-level utilities shared by the balancing engine.
//!
//! None of these compare values: they only walk or re-wire nodes that have
//! already been located.

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor, found through parent links.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Points whichever slot of `parent` holds `child` at `replacement`.
///
/// Without a parent, `child` was the root and `replacement` is returned as
/// the new root; otherwise `root` is returned unchanged. The replacement's
/// own `p` link is the caller's job.
pub fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    parent: Option<u32>,
    child: u32,
    replacement: Option<u32>,
) -> Option<u32> {
    let Some(p) = parent else {
        return replacement;
    };
    if get_l(arena, p) == Some(child) {
        set_l(arena, p, replacement);
    } else {
        set_r(arena, p, replacement);
    }
    root
}

/// Drops the detached node at `idx` out of the arena.
///
/// The arena stays dense: the last node is moved into the vacated slot and
/// the links pointing at it (its parent's child slot or the root, and both
/// children's `p`) are re-targeted. Returns the new root and the released
/// node.
pub fn release<N: Node>(arena: &mut Vec<N>, root: Option<u32>, idx: u32) -> (Option<u32>, N) {
    let moved = (arena.len() - 1) as u32;
    let node = arena.swap_remove(idx as usize);
    if moved == idx {
        return (root, node);
    }

    tracing::trace!(from = moved, to = idx, "relocate node");
    let root = match get_p(arena, idx) {
        Some(p) => {
            if get_l(arena, p) == Some(moved) {
                set_l(arena, p, Some(idx));
            } else {
                set_r(arena, p, Some(idx));
            }
            root
        }
        None => Some(idx),
    };
    if let Some(l) = get_l(arena, idx) {
        set_p(arena, l, Some(idx));
    }
    if let Some(r) = get_r(arena, idx) {
        set_p(arena, r, Some(idx));
    }
    (root, node)
}
