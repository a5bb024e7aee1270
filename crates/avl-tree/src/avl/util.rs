use std::cmp::Ordering;
use std::fmt::Debug;

use crate::types::ValueNode;
use crate::util::{first, get_l, get_p, get_r, next, replace_child, set_l, set_p, set_r};

use super::types::AvlNodeLike;

/// Cached height of `node`, `-1` when absent.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].height())
}

/// `height(right) - height(left)`.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], n: u32) -> i32 {
    height(arena, get_r(arena, n)) - height(arena, get_l(arena, n))
}

#[inline]
pub fn update_height<N: AvlNodeLike>(arena: &mut [N], n: u32) {
    let h = height(arena, get_l(arena, n)).max(height(arena, get_r(arena, n))) + 1;
    arena[n as usize].set_height(h);
}

/// Rotates `n` down to the left under its right child and returns that
/// child, the new local subtree root.
///
/// Only the links inside the rotated pair are rewired. Hooking the new root
/// under `n`'s former parent (and setting its `p`) is left to the caller.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let Some(nr) = get_r(arena, n) else {
        return n;
    };
    tracing::trace!(node = n, pivot = nr, bf = balance_factor(arena, n), "rotate left");

    let nrl = get_l(arena, nr);
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));

    // `nr` now sits above `n`, so `n` goes first.
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Mirror image of [`rotate_left`].
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let Some(nl) = get_l(arena, n) else {
        return n;
    };
    tracing::trace!(node = n, pivot = nl, bf = balance_factor(arena, n), "rotate right");

    let nlr = get_r(arena, nl);
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));

    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Restores the AVL invariant at `n`, assuming both of its subtrees are
/// balanced and carry fresh heights.
///
/// Returns the new tree root and the node now occupying `n`'s old slot
/// (`n` itself when no rotation was needed).
pub fn rebalance<N: AvlNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
) -> (Option<u32>, u32) {
    let bf = balance_factor(arena, n);
    if (-1..=1).contains(&bf) {
        update_height(arena, n);
        return (root, n);
    }

    let p = get_p(arena, n);
    let top = if bf < -1 {
        if let Some(nl) = get_l(arena, n) {
            if balance_factor(arena, nl) > 0 {
                tracing::trace!(node = n, bf, "left-right case");
                let sub = rotate_left(arena, nl);
                set_l(arena, n, Some(sub));
                set_p(arena, sub, Some(n));
            }
        }
        rotate_right(arena, n)
    } else {
        if let Some(nr) = get_r(arena, n) {
            if balance_factor(arena, nr) < 0 {
                tracing::trace!(node = n, bf, "right-left case");
                let sub = rotate_right(arena, nr);
                set_r(arena, n, Some(sub));
                set_p(arena, sub, Some(n));
            }
        }
        rotate_left(arena, n)
    };

    set_p(arena, top, p);
    (replace_child(arena, root, p, n, Some(top)), top)
}

/// Rebalance walk: visits `start` and every ancestor up to the root,
/// rebalancing each one. Returns the new root.
pub fn rebalance_up<N: AvlNodeLike>(
    arena: &mut [N],
    mut root: Option<u32>,
    start: Option<u32>,
) -> Option<u32> {
    let mut curr = start;
    while let Some(n) = curr {
        let (new_root, top) = rebalance(arena, root, n);
        root = new_root;
        curr = get_p(arena, top);
    }
    root
}

/// Locates a node whose value compares equal to `value`.
///
/// With duplicates present, the first equal node met on the way down wins.
pub fn find<T, N, C>(arena: &[N], root: Option<u32>, value: &T, comparator: &C) -> Option<u32>
where
    N: ValueNode<T>,
    C: Fn(&T, &T) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(value, arena[i as usize].value()) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Links the fresh, unlinked node `n` into the tree and rebalances.
///
/// Values comparing equal to an existing one are routed right, so they land
/// after it in in-order sequence. Returns the new root.
pub fn insert<T, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike + ValueNode<T>,
    C: Fn(&T, &T) -> Ordering,
{
    let Some(mut curr) = root else {
        return Some(n);
    };

    loop {
        let go_left = comparator(arena[n as usize].value(), arena[curr as usize].value())
            == Ordering::Less;
        let next = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if go_left {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                return rebalance_up(arena, root, Some(curr));
            }
        }
    }
}

/// Unlinks `n` from the tree and rebalances. Returns the new root.
///
/// `n` is left detached (no links, height `0`) but still occupies its arena
/// slot; see [`crate::util::release`].
pub fn remove<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let p = get_p(arena, n);
    let l = get_l(arena, n);
    let r = get_r(arena, n);

    let (replacement, start) = match (l, r) {
        (Some(l), Some(r)) => {
            // In-order successor: one step right, then left all the way.
            let mut sp = n;
            let mut s = r;
            while let Some(sl) = get_l(arena, s) {
                sp = s;
                s = sl;
            }
            tracing::trace!(node = n, successor = s, "remove with two children");

            if sp != n {
                let sr = get_r(arena, s);
                set_l(arena, sp, sr);
                if let Some(sr) = sr {
                    set_p(arena, sr, Some(sp));
                }
                set_r(arena, s, Some(r));
                set_p(arena, r, Some(s));
            }
            set_l(arena, s, Some(l));
            set_p(arena, l, Some(s));

            (Some(s), Some(if sp == n { s } else { sp }))
        }
        _ => {
            tracing::trace!(node = n, "remove with at most one child");
            (l.or(r), p)
        }
    };

    let root = replace_child(arena, root, p, n, replacement);
    if let Some(c) = replacement {
        set_p(arena, c, p);
    }

    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);
    arena[n as usize].set_height(0);

    rebalance_up(arena, root, start)
}

/// Validates links, cached heights, balance and ordering of the tree at
/// `root`. Returns the number of reachable nodes.
pub fn assert_avl_tree<T, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<usize, String>
where
    N: AvlNodeLike + ValueNode<T>,
    C: Fn(&T, &T) -> Ordering,
{
    let Some(root) = root else {
        return Ok(0);
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn validate<N: AvlNodeLike>(arena: &[N], node: u32, count: &mut usize) -> Result<i32, String> {
        *count += 1;
        let l = get_l(arena, node);
        let r = get_r(arena, node);

        let mut lh = -1;
        if let Some(l) = l {
            if get_p(arena, l) != Some(node) {
                return Err(format!("Broken parent link on left child of node {node}"));
            }
            lh = validate(arena, l, count)?;
        }
        let mut rh = -1;
        if let Some(r) = r {
            if get_p(arena, r) != Some(node) {
                return Err(format!("Broken parent link on right child of node {node}"));
            }
            rh = validate(arena, r, count)?;
        }

        let expected = lh.max(rh) + 1;
        let actual = arena[node as usize].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {node}: expected {expected}, got {actual}"
            ));
        }
        if (rh - lh).abs() > 1 {
            return Err(format!("AVL balance violated at node {node}: bf={}", rh - lh));
        }
        Ok(expected)
    }

    let mut count = 0;
    validate(arena, root, &mut count)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            let cmp = comparator(arena[prev as usize].value(), arena[i as usize].value());
            if cmp == Ordering::Greater {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(count)
}

/// Debug printer for AVL trees.
pub fn print<T, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    T: Debug,
    N: AvlNodeLike + ValueNode<T>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<T, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<T, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {:?}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.value()
            )
        }
    }
}
