use std::cmp::Ordering;
use std::fmt;
use std::mem;

use super::balance::rebalance;
use super::RemoveError;
use crate::node::{Link, Node};
use crate::traverse::{self, DepthFirst};
use crate::verify;

/// An ordered map backed by an AVL tree.
///
/// Keys are unique under `Ord`; inserting a present key overwrites its
/// value in place. After every mutating call the tree satisfies the
/// search-order invariant and keeps every node's balance factor in
/// `{-1, 0, 1}`, so lookups, insertions and removals all run in O(log n).
///
/// Mutation follows one idiom throughout: each recursive helper takes
/// ownership of a subtree, returns the possibly-rotated replacement root,
/// and the caller re-links it. Unlinked nodes are dropped when the last
/// owner lets go; there is no manual reclamation.
pub struct AvlMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> AvlMap<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the root node, e.g. to feed the [`crate::traverse`] layer.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Insert `key` or overwrite its value, returning the displaced value.
    ///
    /// A new key is placed at the leaf the search reaches and every
    /// ancestor on the unwind refreshes its height and rebalances. An
    /// overwrite changes no structure, so the unwind is skipped.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, displaced) = insert_at(self.root.take(), key, value);
        self.root = Some(root);
        if displaced.is_none() {
            self.len += 1;
        }
        displaced
    }

    /// Remove `key`, returning its value.
    ///
    /// An empty tree reports [`RemoveError::Empty`] before any search; a
    /// missing key in a populated tree reports [`RemoveError::NotFound`].
    /// Either failure leaves the tree untouched.
    pub fn remove(&mut self, key: &K) -> Result<V, RemoveError> {
        let root = self.root.take().ok_or(RemoveError::Empty)?;
        let (root, removed) = remove_at(root, key);
        self.root = root;
        match removed {
            Some(value) => {
                self.len -= 1;
                Ok(value)
            }
            None => Err(RemoveError::NotFound),
        }
    }

    /// Iterative descent; no allocation, no recursion.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => curr = node.left.as_deref(),
                Ordering::Greater => curr = node.right.as_deref(),
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut curr = self.root.as_deref_mut();
        while let Some(node) = curr {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => curr = node.left.as_deref_mut(),
                Ordering::Greater => curr = node.right.as_deref_mut(),
            }
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Entry with the minimum key.
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Entry with the maximum key.
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Entries in ascending key order. Restartable: every call walks the
    /// tree afresh.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: traverse::inorder_with_empty(self.root()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Exhaustively check search order, the balance bound, cached heights
    /// and the entry count. Test support; O(n log n).
    pub fn assert_valid(&self) -> Result<(), String> {
        verify::assert_tree(self.root())?;
        let counted = traverse::inorder(self.root()).count();
        if counted != self.len {
            return Err(format!(
                "Length mismatch: {} stored, {} reachable",
                self.len, counted
            ));
        }
        Ok(())
    }
}

fn insert_at<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
    let Some(mut node) = link else {
        return (Box::new(Node::new(key, value)), None);
    };

    let displaced = match key.cmp(&node.key) {
        Ordering::Equal => {
            let displaced = mem::replace(&mut node.value, value);
            return (node, Some(displaced));
        }
        Ordering::Less => {
            let (left, displaced) = insert_at(node.left.take(), key, value);
            node.left = Some(left);
            displaced
        }
        Ordering::Greater => {
            let (right, displaced) = insert_at(node.right.take(), key, value);
            node.right = Some(right);
            displaced
        }
    };

    if displaced.is_some() {
        // Overwrite somewhere below: shape unchanged, heights still valid.
        (node, displaced)
    } else {
        (rebalance(node), displaced)
    }
}

fn remove_at<K: Ord, V>(mut node: Box<Node<K, V>>, key: &K) -> (Link<K, V>, Option<V>) {
    match key.cmp(&node.key) {
        Ordering::Less => {
            let Some(left) = node.left.take() else {
                return (Some(node), None);
            };
            let (left, removed) = remove_at(left, key);
            node.left = left;
            if removed.is_some() {
                (Some(rebalance(node)), removed)
            } else {
                (Some(node), removed)
            }
        }
        Ordering::Greater => {
            let Some(right) = node.right.take() else {
                return (Some(node), None);
            };
            let (right, removed) = remove_at(right, key);
            node.right = right;
            if removed.is_some() {
                (Some(rebalance(node)), removed)
            } else {
                (Some(node), removed)
            }
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                let Node { value, .. } = *node;
                (None, Some(value))
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { value, .. } = *node;
                (Some(child), Some(value))
            }
            (Some(left), Some(right)) => {
                // Swap in the right subtree's minimum; its extraction has
                // already rebalanced that subtree bottom-up.
                let (right, min_key, min_value) = pop_min(right);
                node.key = min_key;
                let value = mem::replace(&mut node.value, min_value);
                node.left = Some(left);
                node.right = right;
                (Some(rebalance(node)), Some(value))
            }
        },
    }
}

/// Detach the minimum node of a subtree, rebalancing the descent path on
/// the unwind. The minimum has no left child, so its right subtree (if
/// any) is spliced into the parent's left link.
fn pop_min<K: Ord, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, K, V) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            let Node { key, value, .. } = *node;
            (right, key, value)
        }
        Some(left) => {
            let (left, key, value) = pop_min(left);
            node.left = left;
            (Some(rebalance(node)), key, value)
        }
    }
}

/// In-order entry iterator, see [`AvlMap::iter`].
pub struct Iter<'a, K, V> {
    nodes: DepthFirst<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.nodes.next()? {
                return Some((&node.key, &node.value));
            }
        }
    }
}

impl<K: Ord, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Set-style bulk construction: each key maps to `V::default()`.
impl<K: Ord, V: Default> FromIterator<K> for AvlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().map(|key| (key, V::default())).collect()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a AvlMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> IntoIterator for AvlMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        fn drain<K, V>(link: Link<K, V>, out: &mut Vec<(K, V)>) {
            if let Some(node) = link {
                let Node {
                    key, value, left, right, ..
                } = *node;
                drain(left, out);
                out.push((key, value));
                drain(right, out);
            }
        }
        let mut entries = Vec::with_capacity(self.len);
        drain(self.root, &mut entries);
        entries.into_iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::print::print(self.root.as_deref(), ""))
    }
}
