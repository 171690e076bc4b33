//! Domain layer: binary tree model and its positional representation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod representation;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::Node;
pub use representation::{format_representation, parse_representation};
pub use tree::Tree;
