//! Binary tree traversals over a heap-layout array representation.
//!
//! A [`Tree`](domain::Tree) is built once from a positional representation, where
//! slot `i` has its children at `2i+1` and `2i+2` and `None` marks a gap, and can
//! be serialized back into that form. The [`traversal`] engine turns a tree into a
//! value sequence in pre-, in- or post-order (each recursive and iterative) or
//! breadth first.
//!
//! ```
//! use treewalk::domain::Tree;
//! use treewalk::traversal::{in_order_iterative, Traversal};
//!
//! let tree = Tree::build(vec![Some(2), Some(1), Some(3)]);
//! assert_eq!(in_order_iterative(tree.root()), vec![1, 2, 3]);
//! assert_eq!(tree.traverse(Traversal::BreadthFirst), vec![2, 1, 3]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod traversal;
pub mod util;
