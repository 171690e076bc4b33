//! Level-order traversal with a FIFO queue.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::Node;

/// Visits nodes level by level, left to right within a level.
#[instrument(level = "trace", skip_all)]
pub fn breadth_first<V: Clone>(root: Option<&Node<V>>) -> Vec<V> {
    let mut values = Vec::new();
    let mut queue: VecDeque<&Node<V>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        values.push(node.value.clone());
        queue.extend(node.left());
        queue.extend(node.right());
    }

    values
}
