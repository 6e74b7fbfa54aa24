//! Rotations and the four-case rebalancing rule.
//!
//! Every helper takes ownership of a subtree root and returns the root of
//! the restructured subtree; callers re-link the result. Ownership of the
//! moving child is taken out of one node and handed to the other, so a
//! rotation never aliases and never leaks.

use crate::node::{balance_factor, Node};

/// Right rotation: the left child becomes the subtree root, the old root
/// becomes its right child, and the pivot's former right subtree becomes
/// the old root's left subtree.
///
/// Heights are recomputed demoted-node-first: the old root's height now
/// depends only on finalized children, and the pivot's depends on the old
/// root's fresh value.
pub(super) fn rotate_right<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = root.left.take().expect("right rotation requires a left child");
    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();
    pivot
}

/// Left rotation, the mirror of [`rotate_right`].
pub(super) fn rotate_left<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = root.right.take().expect("left rotation requires a right child");
    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();
    pivot
}

/// Refresh `node`'s height and restore the balance bound at this node.
///
/// A single structural change can unbalance an ancestor by at most one
/// level, so at most one of the four cases applies:
///
/// - left-heavy, left child not right-leaning: single right rotation;
/// - left-heavy, left child right-leaning: left-rotate the left child
///   first (reduces to the previous case);
/// - the two mirror cases on the right.
///
/// The heavy child's `== 0` balance is grouped with the single-rotation
/// case; the double rotation is only needed when the inner grandchild is
/// the taller one.
pub(super) fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let balance = balance_factor(Some(&node));

    if balance > 1 {
        if balance_factor(node.left.as_deref()) < 0 {
            let left = node.left.take().expect("left-heavy node has a left child");
            node.left = Some(rotate_left(left));
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if balance_factor(node.right.as_deref()) > 0 {
            let right = node.right.take().expect("right-heavy node has a right child");
            node.right = Some(rotate_right(right));
        }
        return rotate_left(node);
    }

    node
}
