//! Enumeration of the shape pairs to test from a scene tree.

use crate::config::PairEnumeration;
use crate::scene::{NodeKey, SceneTree};

/// Calls `emit(outer, inner)` for every pair of collidable leaves selected by `enumeration`.
pub fn walk(tree: &SceneTree, enumeration: PairEnumeration, emit: impl FnMut(NodeKey, NodeKey)) {
    match enumeration {
        PairEnumeration::Nested => walk_nested(tree, emit),
        PairEnumeration::Unique => walk_unique(tree, emit),
    }
}

/// A pair is tested only if both are collidable leaves, distinct, and neither descends from the other.
pub fn is_eligible(tree: &SceneTree, outer: NodeKey, inner: NodeKey) -> bool {
    outer != inner
        && tree[outer].is_collidable()
        && tree[inner].is_collidable()
        && !tree.is_ancestor(inner, outer)
        && !tree.is_ancestor(outer, inner)
}

/// Nested recursion over both sides of the tree.
///
/// Descending into an outer container pairs its children with the whole inner set,
/// while descending into an inner container pairs it only with the children of the current outer node.
/// As the two sides are not handled symmetrically, some pairs are emitted more than once.
pub fn walk_nested(tree: &SceneTree, mut emit: impl FnMut(NodeKey, NodeKey)) {
    let roots = tree.roots();
    iterate(tree, roots, roots, &mut emit);
}

fn iterate(
    tree: &SceneTree,
    outer_set: &[NodeKey],
    inner_set: &[NodeKey],
    emit: &mut impl FnMut(NodeKey, NodeKey),
) {
    for &outer in outer_set {
        let outer_children = &tree[outer].children;
        if !outer_children.is_empty() {
            iterate(tree, outer_children, inner_set, emit);
        }
        for &inner in inner_set {
            let inner_children = &tree[inner].children;
            if !inner_children.is_empty() {
                iterate(tree, outer_children, inner_children, emit);
            }
            if is_eligible(tree, outer, inner) {
                emit(outer, inner);
            }
        }
    }
}

/// Every unordered pair of collidable leaves exactly once, in depth-first order.
pub fn walk_unique(tree: &SceneTree, mut emit: impl FnMut(NodeKey, NodeKey)) {
    let leaves = tree.leaves();
    for (i, &outer) in leaves.iter().enumerate() {
        for &inner in &leaves[i + 1..] {
            if is_eligible(tree, outer, inner) {
                emit(outer, inner);
            }
        }
    }
}
