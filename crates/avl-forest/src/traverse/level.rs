//! Breadth-first traversal, one level at a time.

use crate::node::Node;

/// Lazy level-order iterator yielding the present nodes of each depth.
pub struct Levels<'a, K, V> {
    level: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for Levels<'a, K, V> {
    type Item = Vec<&'a Node<K, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level.is_empty() {
            return None;
        }
        let next = self
            .level
            .iter()
            .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
            .flatten()
            .collect();
        Some(std::mem::replace(&mut self.level, next))
    }
}

/// Level-order iterator that keeps each node's child slots, `None` marking
/// an absent child of a non-leaf node.
///
/// Leaves contribute no slots to the next level, so the sequence ends once
/// the deepest present nodes are all leaves; a level consisting solely of
/// markers is never produced.
pub struct LevelsWithEmpty<'a, K, V> {
    level: Vec<Option<&'a Node<K, V>>>,
}

impl<'a, K, V> Iterator for LevelsWithEmpty<'a, K, V> {
    type Item = Vec<Option<&'a Node<K, V>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level.is_empty() {
            return None;
        }
        let next = self
            .level
            .iter()
            .filter_map(|slot| *slot)
            .filter(|n| !n.is_leaf())
            .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
            .collect();
        Some(std::mem::replace(&mut self.level, next))
    }
}

/// Level-order traversal over present nodes.
pub fn levelorder<K, V>(root: Option<&Node<K, V>>) -> Levels<'_, K, V> {
    Levels {
        level: root.into_iter().collect(),
    }
}

/// Level-order traversal preserving empty child slots, see
/// [`LevelsWithEmpty`].
pub fn levelorder_with_empty<K, V>(root: Option<&Node<K, V>>) -> LevelsWithEmpty<'_, K, V> {
    LevelsWithEmpty {
        level: root.map(Some).into_iter().collect(),
    }
}
