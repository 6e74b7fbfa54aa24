//! Invariant checks built on the traversal layer.
//!
//! Meant for tests and debugging; production code paths never call these.

use crate::node::{balance_factor, height, Node};
use crate::traverse;

/// True iff the in-order key sequence is strictly ascending.
///
/// An empty tree is a valid search tree.
pub fn is_bst<K: Ord, V>(root: Option<&Node<K, V>>) -> bool {
    let mut keys = traverse::inorder(root).map(|n| &n.key);
    let Some(mut prev) = keys.next() else {
        return true;
    };
    for key in keys {
        if prev >= key {
            return false;
        }
        prev = key;
    }
    true
}

/// True iff every node's balance factor is in `{-1, 0, 1}`.
pub fn is_avl<K, V>(root: Option<&Node<K, V>>) -> bool {
    traverse::preorder(root).all(|n| balance_factor(Some(n)).abs() <= 1)
}

/// Check cached heights, the balance bound and key ordering, reporting the
/// first violation.
pub fn assert_tree<K: Ord, V>(root: Option<&Node<K, V>>) -> Result<(), String> {
    for node in traverse::preorder(root) {
        let expected = 1 + height(node.left.as_deref()).max(height(node.right.as_deref()));
        if node.height != expected {
            return Err(format!(
                "Height mismatch: expected {expected}, got {}",
                node.height
            ));
        }
        if balance_factor(Some(node)).abs() > 1 {
            return Err("Balance factor out of range".to_string());
        }
    }
    if !is_bst(root) {
        return Err("Key order violated".to_string());
    }
    Ok(())
}
