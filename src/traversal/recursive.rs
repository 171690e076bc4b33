//! Depth-first traversals driven by the call stack.
//!
//! Each function calls itself once per child slot, so call depth follows tree height.

use tracing::instrument;

use crate::domain::Node;

#[instrument(level = "trace", skip_all)]
pub fn pre_order_recursive<V: Clone>(node: Option<&Node<V>>) -> Vec<V> {
    let Some(node) = node else {
        return Vec::new();
    };
    let mut values = vec![node.value.clone()];
    values.extend(pre_order_recursive(node.left()));
    values.extend(pre_order_recursive(node.right()));
    values
}

#[instrument(level = "trace", skip_all)]
pub fn in_order_recursive<V: Clone>(node: Option<&Node<V>>) -> Vec<V> {
    let Some(node) = node else {
        return Vec::new();
    };
    let mut values = in_order_recursive(node.left());
    values.push(node.value.clone());
    values.extend(in_order_recursive(node.right()));
    values
}

#[instrument(level = "trace", skip_all)]
pub fn post_order_recursive<V: Clone>(node: Option<&Node<V>>) -> Vec<V> {
    let Some(node) = node else {
        return Vec::new();
    };
    let mut values = post_order_recursive(node.left());
    values.extend(post_order_recursive(node.right()));
    values.push(node.value.clone());
    values
}
