//! Self-balancing AVL tree map with reusable binary-tree traversal
//! utilities.
//!
//! Two layers:
//!
//! - [`node`] and [`traverse`] define the tree shape ([`Node`], owning
//!   [`Link`]s, no parent pointers) and pure traversal/inspection
//!   functions over any borrowed subtree.
//! - [`avl`] builds [`AvlMap`] on top: an ordered map that rebalances
//!   after every structural change, keeping all operations O(log n).
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`], [`Link`], `height`, `balance_factor`, `is_leaf` |
//! | [`traverse`] | pre/in/post/level-order iterators, [`is_equal`] |
//! | [`avl`] | [`AvlMap`], [`RemoveError`] |
//! | [`verify`] | `is_bst` / `is_avl` / `assert_tree` invariant checks |
//! | [`print`] | indented debug rendering of subtrees |
//!
//! # Example
//!
//! ```
//! use avl_forest::AvlMap;
//!
//! let mut map = AvlMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! map.insert("c", 3);
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, ["a", "b", "c"]);
//!
//! assert_eq!(map.remove(&"b"), Ok(2));
//! assert!(!map.contains_key(&"b"));
//! ```

pub mod avl;
pub mod node;
pub mod print;
pub mod traverse;
pub mod verify;

pub use avl::{AvlMap, RemoveError};
pub use node::{balance_factor, height, is_leaf, Link, Node};
pub use traverse::{inorder, is_equal, levelorder, postorder, preorder};
pub use verify::{assert_tree, is_avl, is_bst};
