/*
Directory-listing style view of a tree, built on termtree.

Children are tagged with their side, since a lone child would otherwise not tell
whether it hangs left or right:

0
├── [L] 1
│   └── [R] 3
└── [R] 2
 */
use std::fmt;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::domain::{Node, Tree};

const EMPTY_LABEL: &str = "(empty)";

pub trait TreeOutline {
    fn to_outline(&self) -> TermTree<String>;
}

impl<V: fmt::Display> TreeOutline for Node<V> {
    fn to_outline(&self) -> TermTree<String> {
        outline_node(self, None)
    }
}

impl<V: fmt::Display> TreeOutline for Tree<V> {
    #[instrument(level = "debug", skip(self))]
    fn to_outline(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => root.to_outline(),
            None => TermTree::new(EMPTY_LABEL.to_string()),
        }
    }
}

fn outline_node<V: fmt::Display>(node: &Node<V>, side: Option<&str>) -> TermTree<String> {
    let label = match side {
        Some(side) => format!("[{}] {}", side, node.value),
        None => node.value.to_string(),
    };

    let leaves: Vec<_> = [("L", node.left()), ("R", node.right())]
        .into_iter()
        .filter_map(|(side, child)| child.map(|child| outline_node(child, Some(side))))
        .collect();

    TermTree::new(label).with_leaves(leaves)
}
