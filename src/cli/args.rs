//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::render::RenderStyle;
use crate::traversal::Traversal;

/// Binary tree traversals over a heap-layout array representation
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(long, global = true, env = "TREEWALK_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the tree representation comes from.
///
/// Values are separated by whitespace or commas; `None`, `null` or `_` mark a gap.
/// Without values or `--file` the representation is read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Representation values, e.g. `0 1 2 _ 3`
    #[arg(conflicts_with = "file")]
    pub values: Vec<String>,

    /// Read the representation from a file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Drop values whose parent slot is a gap instead of failing
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the values of one traversal
    Walk {
        /// Traversal order (default from config)
        #[arg(short, long, value_enum)]
        order: Option<Traversal>,
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the values of every traversal
    All {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Draw the tree
    Render {
        /// Diagram style (default from config)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
        /// Value cell width for ascii diagrams (default from config)
        #[arg(short, long)]
        width: Option<usize>,
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the tree height (-1 for an empty tree)
    Height {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the normalized representation
    Repr {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
