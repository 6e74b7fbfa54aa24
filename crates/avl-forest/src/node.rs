//! Binary tree node shape and node-level queries.
//!
//! A node exclusively owns its children through [`Link`]s; there are no
//! parent pointers and no sentinel nodes. Every function here operates on
//! a borrowed subtree root, which may be empty.

/// Owning child link. `None` is an absent subtree.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// One entry of a binary tree.
///
/// `height` is cached so balance queries stay O(1): a leaf has height 1,
/// and every interior node satisfies
/// `height == 1 + max(height(left), height(right))` with an absent child
/// counting as height 0.
#[derive(Clone)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub height: usize,
    pub left: Link<K, V>,
    pub right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// True iff both children are absent.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recompute the cached height from the children's cached heights.
    ///
    /// Must be called again whenever a child link is reassigned.
    pub fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }
}

impl<K: Clone, V: Default> Node<K, V> {
    /// Build a tree from a level-order array with `None` holes.
    ///
    /// Index `i` parents indices `2i + 1` and `2i + 2`, so only holes after
    /// the last present key may be omitted:
    ///
    /// ```
    /// use avl_forest::node::Node;
    ///
    /// //    1
    /// //  2   3
    /// // 4 5
    /// let root = Node::<i32, ()>::from_level_order(&[
    ///     Some(1),
    ///     Some(2), Some(3),
    ///     Some(4), Some(5),
    /// ]);
    /// assert_eq!(root.unwrap().height, 3);
    /// ```
    ///
    /// The resulting shape is arbitrary: nothing here orders or balances
    /// the keys, which makes this the natural fixture builder for the
    /// traversal layer. Values are filled with `V::default()`.
    pub fn from_level_order(items: &[Option<K>]) -> Link<K, V> {
        build_at(items, 0)
    }
}

fn build_at<K: Clone, V: Default>(items: &[Option<K>], idx: usize) -> Link<K, V> {
    let key = items.get(idx)?.clone()?;
    let mut node = Box::new(Node::new(key, V::default()));
    node.left = build_at(items, 2 * idx + 1);
    node.right = build_at(items, 2 * idx + 2);
    node.update_height();
    Some(node)
}

/// True iff `node` is present and has no children. An empty subtree is
/// not a leaf.
pub fn is_leaf<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_some_and(Node::is_leaf)
}

/// Height of a possibly-empty subtree. An empty subtree has height 0.
pub fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |n| n.height)
}

/// Balance factor, `height(left) - height(right)`. 0 for an empty subtree.
pub fn balance_factor<K, V>(node: Option<&Node<K, V>>) -> i32 {
    node.map_or(0, |n| {
        height(n.left.as_deref()) as i32 - height(n.right.as_deref()) as i32
    })
}
