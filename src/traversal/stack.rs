//! Depth-first traversals with an explicit stack.
//!
//! These mimic the call stack of the recursive variants with a `Vec` of node
//! references; none of them calls itself.

use tracing::instrument;

use crate::domain::Node;

/// Pops a node, records it, then pushes right before left so left is visited first.
#[instrument(level = "trace", skip_all)]
pub fn pre_order_iterative<V: Clone>(root: Option<&Node<V>>) -> Vec<V> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node<V>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        values.push(node.value.clone());
        stack.extend(node.right());
        stack.extend(node.left());
    }

    values
}

/// Descends left pushing every node, then pops, records and continues in the right subtree.
#[instrument(level = "trace", skip_all)]
pub fn in_order_iterative<V: Clone>(root: Option<&Node<V>>) -> Vec<V> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node<V>> = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        values.push(node.value.clone());
        current = node.right();
    }

    values
}

/// Each node is pushed twice: first unexpanded, then (below its children) expanded.
/// An expanded node is recorded when popped, after both of its subtrees.
#[instrument(level = "trace", skip_all)]
pub fn post_order_iterative<V: Clone>(root: Option<&Node<V>>) -> Vec<V> {
    let mut values = Vec::new();
    let mut stack: Vec<(&Node<V>, bool)> = root.map(|node| (node, false)).into_iter().collect();

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            values.push(node.value.clone());
            continue;
        }
        stack.push((node, true));
        // right first so the left subtree is finished first
        for child in [node.right(), node.left()].into_iter().flatten() {
            stack.push((child, false));
        }
    }

    values
}
