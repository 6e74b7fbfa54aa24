//! Ownership-agnostic traversal and comparison utilities.
//!
//! Every function takes a borrowed, possibly-empty subtree root and
//! degrades to an empty sequence (or `true` for [`is_equal`]) on `None`;
//! an empty subtree is a normal input, never an error. Traversals are
//! lazy and finite; each call starts a fresh walk over the current tree.

pub mod depth;
pub mod level;

pub use depth::{
    inorder, inorder_with_empty, postorder, postorder_with_empty, preorder, preorder_with_empty,
    DepthFirst,
};
pub use level::{levelorder, levelorder_with_empty, Levels, LevelsWithEmpty};

use crate::node::Node;

/// Structural equality: same shape and the same key at every position.
///
/// Compares level by level with empty child slots preserved, which is what
/// distinguishes a node with only a left child from one with only a right
/// child. Two empty trees are equal.
pub fn is_equal<K: PartialEq, V>(a: Option<&Node<K, V>>, b: Option<&Node<K, V>>) -> bool {
    let mut left = levelorder_with_empty(a);
    let mut right = levelorder_with_empty(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(la), Some(lb)) => {
                if la.len() != lb.len() {
                    return false;
                }
                let same = la.iter().zip(&lb).all(|(sa, sb)| match (sa, sb) {
                    (None, None) => true,
                    (Some(na), Some(nb)) => na.key == nb.key,
                    _ => false,
                });
                if !same {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
