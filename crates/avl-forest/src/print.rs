//! Indented debug printer for subtrees.

use std::fmt::Debug;

use crate::node::Node;

/// Render a subtree one node per line, children indented under their
/// parent. `tab` is the indentation prefix of the root line.
pub fn print<K: Debug, V: Debug>(node: Option<&Node<K, V>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let child_tab = format!("{tab}  ");
            let left = print(n.left.as_deref(), &child_tab);
            let right = print(n.right.as_deref(), &child_tab);
            format!(
                "Node [h={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height, n.key, n.value
            )
        }
    }
}
