use avl_tree::avl::util::{
    assert_avl_tree, balance_factor, find, height, insert, rebalance_up, remove, rotate_right,
};
use avl_tree::util::{first, last, next, release, replace_child};
use avl_tree::AvlNode;

fn cmp_i32(a: &i32, b: &i32) -> std::cmp::Ordering {
    a.cmp(b)
}

fn build(values: &[i32]) -> (Vec<AvlNode<i32>>, Option<u32>) {
    let mut arena: Vec<AvlNode<i32>> = values.iter().copied().map(AvlNode::new).collect();
    let mut root = None;
    for i in 0..arena.len() as u32 {
        root = insert(&mut arena, root, i, &cmp_i32);
    }
    (arena, root)
}

fn collect_in_order(arena: &[AvlNode<i32>], root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i as usize].v);
        curr = next(arena, i);
    }
    out
}

#[test]
fn insert_first_node_becomes_root() {
    let (arena, root) = build(&[7]);
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].h, 0);
    assert_eq!(arena[0].p, None);
}

#[test]
fn insert_left_right_case_shape() {
    let (arena, root) = build(&[3, 1, 2]);
    assert_eq!(root, Some(2));
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[2].r, Some(0));
    assert_eq!(arena[1].p, Some(2));
    assert_eq!(arena[0].p, Some(2));
    assert_eq!(arena[2].h, 1);
    assert_eq!(balance_factor(&arena, 2), 0);
    assert_eq!(assert_avl_tree(&arena, root, &cmp_i32), Ok(3));
}

#[test]
fn insert_keeps_bst_shape_without_rotation() {
    let (arena, root) = build(&[10, 5, 15, 4, 6, 14, 16]);
    let root = root.unwrap();
    assert_eq!(arena[root as usize].v, 10);
    let l = arena[root as usize].l.unwrap();
    let r = arena[root as usize].r.unwrap();
    assert_eq!(arena[l as usize].v, 5);
    assert_eq!(arena[r as usize].v, 15);
    assert_eq!(arena[arena[l as usize].l.unwrap() as usize].v, 4);
    assert_eq!(arena[arena[l as usize].r.unwrap() as usize].v, 6);
    assert_eq!(arena[arena[r as usize].l.unwrap() as usize].v, 14);
    assert_eq!(arena[arena[r as usize].r.unwrap() as usize].v, 16);
    assert_eq!(height(&arena, Some(root)), 2);
}

#[test]
fn find_descends_by_comparison() {
    let (arena, root) = build(&[10, 5, 15, 4, 6, 14, 16]);
    assert_eq!(find(&arena, root, &14, &cmp_i32), Some(5));
    assert_eq!(find(&arena, root, &13, &cmp_i32), None);
    assert_eq!(find(&arena, None, &13, &cmp_i32), None);
}

#[test]
fn first_last_next_walk() {
    let (arena, root) = build(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(first(&arena, root).map(|i| arena[i as usize].v), Some(1));
    assert_eq!(last(&arena, root).map(|i| arena[i as usize].v), Some(7));
    assert_eq!(collect_in_order(&arena, root), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(first::<AvlNode<i32>>(&arena, None), None);
}

#[test]
fn remove_leaves_node_detached() {
    let (mut arena, root) = build(&[2, 1, 3]);
    let root = remove(&mut arena, root, 0);
    assert_eq!(root, Some(2));
    assert_eq!(arena[0].p, None);
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, None);
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[1].p, Some(2));
    assert_eq!(collect_in_order(&arena, root), vec![1, 3]);
}

#[test]
fn release_relocates_last_node() {
    // 2(1, 3) stored as [1, 2, 3]; drop node 0 so node 2 moves into slot 0.
    let (mut arena, root) = build(&[1, 2, 3]);
    assert_eq!(root, Some(1));
    let root = remove(&mut arena, root, 0);
    let (root, released) = release(&mut arena, root, 0);
    assert_eq!(released.v, 1);
    assert_eq!(arena.len(), 2);
    assert_eq!(root, Some(1));
    assert_eq!(arena[0].v, 3);
    assert_eq!(arena[1].r, Some(0));
    assert_eq!(arena[0].p, Some(1));
    assert_eq!(assert_avl_tree(&arena, root, &cmp_i32), Ok(2));
}

#[test]
fn release_relocates_root() {
    let (mut arena, root) = build(&[1, 2, 3]);
    let root = remove(&mut arena, root, 1);
    assert_eq!(root, Some(2));
    let (root, released) = release(&mut arena, root, 1);
    assert_eq!(released.v, 2);
    assert_eq!(root, Some(1));
    assert_eq!(arena[1].v, 3);
    assert_eq!(arena[0].p, Some(1));
    assert_eq!(collect_in_order(&arena, root), vec![1, 3]);
    assert_eq!(assert_avl_tree(&arena, root, &cmp_i32), Ok(2));
}

#[test]
fn release_last_slot_keeps_links() {
    let (mut arena, root) = build(&[1, 2, 3]);
    let root = remove(&mut arena, root, 2);
    let (root, released) = release(&mut arena, root, 2);
    assert_eq!(released.v, 3);
    assert_eq!(root, Some(1));
    assert_eq!(collect_in_order(&arena, root), vec![1, 2]);
}

#[test]
fn replace_child_swaps_slot() {
    let (mut arena, root) = build(&[2, 1, 3]);
    assert_eq!(replace_child(&mut arena, root, Some(0), 2, None), root);
    assert_eq!(arena[0].r, None);
    assert_eq!(replace_child(&mut arena, root, None, 0, Some(1)), Some(1));
}

#[test]
fn rotate_right_then_walk_restores_root() {
    // Hand-built left chain 3 -> 2 -> 1.
    let mut arena: Vec<AvlNode<i32>> = vec![AvlNode::new(3), AvlNode::new(2), AvlNode::new(1)];
    arena[0].l = Some(1);
    arena[1].p = Some(0);
    arena[1].l = Some(2);
    arena[2].p = Some(1);
    arena[1].h = 1;
    arena[0].h = 2;

    let top = rotate_right(&mut arena, 0);
    assert_eq!(top, 1);
    assert_eq!(arena[1].r, Some(0));
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].h, 0);
    assert_eq!(arena[1].h, 1);

    // Restore the chain and let the walk do the rotation instead.
    let mut arena: Vec<AvlNode<i32>> = vec![AvlNode::new(3), AvlNode::new(2), AvlNode::new(1)];
    arena[0].l = Some(1);
    arena[1].p = Some(0);
    arena[1].l = Some(2);
    arena[2].p = Some(1);
    let root = rebalance_up(&mut arena, Some(0), Some(2));
    assert_eq!(root, Some(1));
    assert_eq!(arena[1].p, None);
    assert_eq!(assert_avl_tree(&arena, root, &cmp_i32), Ok(3));
}

#[test]
fn assert_detects_broken_height() {
    let (mut arena, root) = build(&[1, 2, 3]);
    arena[1].h = 5;
    assert!(assert_avl_tree(&arena, root, &cmp_i32).is_err());
}

#[test]
fn assert_detects_broken_parent_link() {
    let (mut arena, root) = build(&[1, 2, 3]);
    arena[0].p = None;
    assert!(assert_avl_tree(&arena, root, &cmp_i32).is_err());
}
