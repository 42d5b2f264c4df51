//! Traversal orders over a [`BinaryTree`]
//!
//! Each function returns the visited values in order, starting from the
//! tree's root. An empty tree yields an empty `Vec`.

use super::node::{BinaryTree, NodeId};
use std::collections::VecDeque;

/// Root, left, right
pub fn preorder<V: Clone>(tree: &BinaryTree<V>) -> Vec<V> {
    fn walk<V: Clone>(tree: &BinaryTree<V>, node: Option<NodeId>, out: &mut Vec<V>) {
        if let Some(id) = node {
            out.extend(tree.value(id).cloned());
            walk(tree, tree.left(id), out);
            walk(tree, tree.right(id), out);
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    walk(tree, tree.root(), &mut out);
    out
}

/// Left, root, right
pub fn inorder<V: Clone>(tree: &BinaryTree<V>) -> Vec<V> {
    fn walk<V: Clone>(tree: &BinaryTree<V>, node: Option<NodeId>, out: &mut Vec<V>) {
        if let Some(id) = node {
            walk(tree, tree.left(id), out);
            out.extend(tree.value(id).cloned());
            walk(tree, tree.right(id), out);
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    walk(tree, tree.root(), &mut out);
    out
}

/// Left, right, root
pub fn postorder<V: Clone>(tree: &BinaryTree<V>) -> Vec<V> {
    fn walk<V: Clone>(tree: &BinaryTree<V>, node: Option<NodeId>, out: &mut Vec<V>) {
        if let Some(id) = node {
            walk(tree, tree.left(id), out);
            walk(tree, tree.right(id), out);
            out.extend(tree.value(id).cloned());
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    walk(tree, tree.root(), &mut out);
    out
}

/// Level by level, left to right
pub fn level_order<V: Clone>(tree: &BinaryTree<V>) -> Vec<V> {
    let mut out = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<NodeId> = tree.root().into_iter().collect();

    while let Some(id) = queue.pop_front() {
        out.extend(tree.value(id).cloned());
        queue.extend(tree.left(id));
        queue.extend(tree.right(id));
    }

    out
}
