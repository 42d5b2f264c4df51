//! Binary trees and their traversals
//!
//! - [`node`]: [`BinaryTree`], an arena of nodes addressed by [`NodeId`]
//! - [`traversal`]: pre-order, in-order, post-order and level-order walks
//!
//! [`complete_tree`] builds the demonstration tree: every level full, values
//! assigned 1, 2, 3, ... in level order. With 5 levels that is 31 nodes:
//!
//! ```text
//!                 1
//!         2               3
//!     4       5       6       7
//!   8   9   10  11  12  13  14  15
//!  16 ...                       31
//! ```

pub mod node;
pub mod traversal;

pub use node::{BinaryTree, NodeId};
pub use traversal::{inorder, level_order, postorder, preorder};

/// Build a perfect binary tree with `levels` levels, numbered in level order.
///
/// Returns an empty tree for `levels == 0`.
pub fn complete_tree(levels: u32) -> BinaryTree<u32> {
    let mut tree = BinaryTree::new();
    if levels == 0 {
        return tree;
    }

    let root = tree.set_root(1);
    let mut current_level = vec![root];
    let mut next_value = 2;

    for _ in 1..levels {
        let mut next_level = Vec::with_capacity(current_level.len() * 2);
        for parent in current_level {
            next_level.extend(tree.insert_left(parent, next_value));
            next_level.extend(tree.insert_right(parent, next_value + 1));
            next_value += 2;
        }
        current_level = next_level;
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tree_shape() {
        let tree = complete_tree(5);
        assert_eq!(tree.len(), 31);

        let root = tree.root().unwrap();
        assert_eq!(tree.value(root), Some(&1));

        let left = tree.left(root).unwrap();
        let right = tree.right(root).unwrap();
        assert_eq!(tree.value(left), Some(&2));
        assert_eq!(tree.value(right), Some(&3));

        // Rightmost leaf
        let mut node = root;
        while let Some(child) = tree.right(node) {
            node = child;
        }
        assert_eq!(tree.value(node), Some(&31));
    }

    #[test]
    fn test_zero_levels() {
        let tree = complete_tree(0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }
}
