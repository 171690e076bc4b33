use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{format_representation, parse_representation, Tree};
use crate::render::{render_tree, RenderStyle};
use crate::traversal::Traversal;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    match &cli.command {
        Some(Commands::Walk { order, input }) => _walk(&settings, *order, input),
        Some(Commands::All { input }) => _all(input),
        Some(Commands::Render {
            style,
            width,
            input,
        }) => _render(&settings, *style, *width, input),
        Some(Commands::Height { input }) => _height(input),
        Some(Commands::Repr { input }) => _repr(input),
        Some(Commands::Config { command }) => _config(cli, &settings, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument(level = "debug", skip(settings))]
fn _walk(settings: &Settings, order: Option<Traversal>, input: &InputArgs) -> CliResult<()> {
    let order = order.unwrap_or(settings.default_order);
    let tree = load_tree(input)?;
    output::info(&format_values(&tree.traverse(order)));
    Ok(())
}

#[instrument(level = "debug")]
fn _all(input: &InputArgs) -> CliResult<()> {
    let tree = load_tree(input)?;
    output::header(&format!("{} nodes, height {}", tree.len(), tree.height()));
    for (order, values) in all_traversals(&tree) {
        output::action(order.name(), &values);
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _render(
    settings: &Settings,
    style: Option<RenderStyle>,
    width: Option<usize>,
    input: &InputArgs,
) -> CliResult<()> {
    let width = width.unwrap_or(settings.value_width);
    if width == 0 {
        return Err(CliError::InvalidArgs("width must be at least 1".to_string()));
    }
    let tree = load_tree(input)?;
    output::info(&render_tree(&tree, style.unwrap_or(settings.style), width));
    Ok(())
}

#[instrument(level = "debug")]
fn _height(input: &InputArgs) -> CliResult<()> {
    let tree = load_tree(input)?;
    output::info(&tree.height());
    Ok(())
}

#[instrument(level = "debug")]
fn _repr(input: &InputArgs) -> CliResult<()> {
    let tree = load_tree(input)?;
    output::info(&format_representation(&tree.to_representation()));
    Ok(())
}

fn _config(cli: &Cli, settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(settings.to_toml()?.trim_end()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no config directory on this platform"),
            }
            if let Some(path) = &cli.config {
                output::action("explicit", &path.display());
            }
        }
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Reads the representation text from `--file`, the positional values or stdin.
fn read_input(input: &InputArgs) -> CliResult<String> {
    if let Some(path) = &input.file {
        return fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        });
    }
    if !input.values.is_empty() {
        return Ok(input.values.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| CliError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(text)
}

fn load_tree(input: &InputArgs) -> CliResult<Tree<i64>> {
    let text = read_input(input)?;
    tree_from_text(&text, input.lenient)
}

/// Parses and builds a tree; orphaned values fail unless `lenient`.
pub fn tree_from_text(text: &str, lenient: bool) -> CliResult<Tree<i64>> {
    let representation: Vec<Option<i64>> = parse_representation(text)?;
    if !lenient {
        return Ok(Tree::try_build(representation)?);
    }

    let present = representation.iter().flatten().count();
    let tree = Tree::build(representation);
    let dropped = present - tree.len();
    if dropped > 0 {
        output::warning(&format!("dropped {} value(s) without a parent node", dropped));
    }
    Ok(tree)
}

pub fn format_values(values: &[i64]) -> String {
    values.iter().join(" ")
}

/// Every traversal of `tree`, formatted, in [`Traversal::ALL`] order.
pub fn all_traversals(tree: &Tree<i64>) -> Vec<(Traversal, String)> {
    Traversal::ALL
        .into_iter()
        .map(|order| (order, format_values(&tree.traverse(order))))
        .collect()
}
