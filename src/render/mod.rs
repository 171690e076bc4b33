//! Presentation: textual views of a tree.
//!
//! The ASCII diagram consumes only the positional representation; the outline
//! walks the node graph.

pub mod ascii;
pub mod outline;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::Tree;

pub use outline::TreeOutline;

/// Cell width used when none is configured.
pub const DEFAULT_VALUE_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    /// Level-by-level diagram with `/`, `\` and `_` connectors
    #[default]
    Ascii,
    /// Indented listing with box-drawing guides
    Outline,
}

impl RenderStyle {
    pub fn name(self) -> &'static str {
        match self {
            RenderStyle::Ascii => "ascii",
            RenderStyle::Outline => "outline",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `tree` in the given style.
pub fn render_tree<V>(tree: &Tree<V>, style: RenderStyle, value_width: usize) -> String
where
    V: fmt::Display + Clone,
{
    match style {
        RenderStyle::Ascii => ascii::render(&tree.to_representation(), value_width),
        RenderStyle::Outline => tree.to_outline().to_string().trim_end().to_string(),
    }
}

impl<V: fmt::Display + Clone> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ascii::render(&self.to_representation(), DEFAULT_VALUE_WIDTH))
    }
}
