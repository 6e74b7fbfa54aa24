//! Depth-first traversal iterators.
//!
//! All three orders share one explicit-stack machine: a stack entry either
//! descends into a subtree or emits an already-scheduled item. Expanding a
//! node pushes its children and its own emit entry in the order's reverse,
//! so the stack pops them in the right sequence without recursion.

use crate::node::Node;

enum Step<'a, K, V> {
    Descend(&'a Node<K, V>),
    Emit(Option<&'a Node<K, V>>),
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

/// Lazy depth-first iterator over a borrowed subtree.
///
/// Yields `Some(node)` for present nodes. When constructed through a
/// `*_with_empty` function it additionally yields `None` for each absent
/// child of a non-leaf node, which is what structural comparison needs to
/// tell a left-leaning shape from a right-leaning one. Leaves expand to
/// nothing in either mode.
pub struct DepthFirst<'a, K, V> {
    stack: Vec<Step<'a, K, V>>,
    order: Order,
    with_empty: bool,
}

impl<'a, K, V> DepthFirst<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, order: Order, with_empty: bool) -> Self {
        Self {
            stack: root.map(Step::Descend).into_iter().collect(),
            order,
            with_empty,
        }
    }

    /// Push the entry for one child slot, innermost-first.
    fn push_child(&mut self, parent: &'a Node<K, V>, child: Option<&'a Node<K, V>>) {
        match child {
            Some(c) => self.stack.push(Step::Descend(c)),
            None => {
                if self.with_empty && !parent.is_leaf() {
                    self.stack.push(Step::Emit(None));
                }
            }
        }
    }

    fn expand(&mut self, node: &'a Node<K, V>) {
        let left = node.left.as_deref();
        let right = node.right.as_deref();
        // Pushed in reverse of the order they should pop.
        match self.order {
            Order::Pre => {
                self.push_child(node, right);
                self.push_child(node, left);
                self.stack.push(Step::Emit(Some(node)));
            }
            Order::In => {
                self.push_child(node, right);
                self.stack.push(Step::Emit(Some(node)));
                self.push_child(node, left);
            }
            Order::Post => {
                self.stack.push(Step::Emit(Some(node)));
                self.push_child(node, right);
                self.push_child(node, left);
            }
        }
    }
}

impl<'a, K, V> Iterator for DepthFirst<'a, K, V> {
    type Item = Option<&'a Node<K, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Step::Emit(item) => return Some(item),
                Step::Descend(node) => self.expand(node),
            }
        }
    }
}

/// Pre-order traversal: node, left subtree, right subtree.
pub fn preorder<'a, K, V>(
    root: Option<&'a Node<K, V>>,
) -> impl Iterator<Item = &'a Node<K, V>> {
    DepthFirst::new(root, Order::Pre, false).flatten()
}

/// Pre-order traversal that also yields `None` markers for absent children
/// of non-leaf nodes.
pub fn preorder_with_empty<K, V>(root: Option<&Node<K, V>>) -> DepthFirst<'_, K, V> {
    DepthFirst::new(root, Order::Pre, true)
}

/// In-order traversal: left subtree, node, right subtree.
///
/// For a binary search tree this visits keys in ascending order.
pub fn inorder<'a, K, V>(root: Option<&'a Node<K, V>>) -> impl Iterator<Item = &'a Node<K, V>> {
    DepthFirst::new(root, Order::In, false).flatten()
}

/// In-order traversal with `None` markers, see [`preorder_with_empty`].
pub fn inorder_with_empty<K, V>(root: Option<&Node<K, V>>) -> DepthFirst<'_, K, V> {
    DepthFirst::new(root, Order::In, true)
}

/// Post-order traversal: left subtree, right subtree, node.
pub fn postorder<'a, K, V>(
    root: Option<&'a Node<K, V>>,
) -> impl Iterator<Item = &'a Node<K, V>> {
    DepthFirst::new(root, Order::Post, false).flatten()
}

/// Post-order traversal with `None` markers, see [`preorder_with_empty`].
pub fn postorder_with_empty<K, V>(root: Option<&Node<K, V>>) -> DepthFirst<'_, K, V> {
    DepthFirst::new(root, Order::Post, true)
}
