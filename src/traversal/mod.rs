//! Traversal engine: seven ways to turn a tree into a value sequence.
//!
//! Recursive variants live in [`recursive`], stack-based ones in [`stack`] and the
//! level-order walk in [`queue`]. Every function is a `tracing` span named after
//! itself, so an external subscriber can count how often each one is entered.

pub mod queue;
pub mod recursive;
pub mod stack;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Node, Tree};

pub use queue::breadth_first;
pub use recursive::{in_order_recursive, post_order_recursive, pre_order_recursive};
pub use stack::{in_order_iterative, post_order_iterative, pre_order_iterative};

/// Selects one of the traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    PreOrderRecursive,
    PreOrderIterative,
    InOrderRecursive,
    InOrderIterative,
    PostOrderRecursive,
    PostOrderIterative,
    BreadthFirst,
}

impl Traversal {
    pub const ALL: [Traversal; 7] = [
        Traversal::PreOrderRecursive,
        Traversal::PreOrderIterative,
        Traversal::InOrderRecursive,
        Traversal::InOrderIterative,
        Traversal::PostOrderRecursive,
        Traversal::PostOrderIterative,
        Traversal::BreadthFirst,
    ];

    /// Kebab-case name, as accepted on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Traversal::PreOrderRecursive => "pre-order-recursive",
            Traversal::PreOrderIterative => "pre-order-iterative",
            Traversal::InOrderRecursive => "in-order-recursive",
            Traversal::InOrderIterative => "in-order-iterative",
            Traversal::PostOrderRecursive => "post-order-recursive",
            Traversal::PostOrderIterative => "post-order-iterative",
            Traversal::BreadthFirst => "breadth-first",
        }
    }

    /// Name of the implementing function, which is also its span name.
    pub fn function_name(self) -> &'static str {
        match self {
            Traversal::PreOrderRecursive => "pre_order_recursive",
            Traversal::PreOrderIterative => "pre_order_iterative",
            Traversal::InOrderRecursive => "in_order_recursive",
            Traversal::InOrderIterative => "in_order_iterative",
            Traversal::PostOrderRecursive => "post_order_recursive",
            Traversal::PostOrderIterative => "post_order_iterative",
            Traversal::BreadthFirst => "breadth_first",
        }
    }

    pub fn is_recursive(self) -> bool {
        matches!(
            self,
            Traversal::PreOrderRecursive
                | Traversal::InOrderRecursive
                | Traversal::PostOrderRecursive
        )
    }

    pub fn apply<V: Clone>(self, root: Option<&Node<V>>) -> Vec<V> {
        debug!(order = self.name(), "traversing");
        match self {
            Traversal::PreOrderRecursive => pre_order_recursive(root),
            Traversal::PreOrderIterative => pre_order_iterative(root),
            Traversal::InOrderRecursive => in_order_recursive(root),
            Traversal::InOrderIterative => in_order_iterative(root),
            Traversal::PostOrderRecursive => post_order_recursive(root),
            Traversal::PostOrderIterative => post_order_iterative(root),
            Traversal::BreadthFirst => breadth_first(root),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<V: Clone> Tree<V> {
    /// Values of the tree in the given order.
    pub fn traverse(&self, order: Traversal) -> Vec<V> {
        order.apply(self.root())
    }
}
