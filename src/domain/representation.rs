//! Positional (heap-layout) representation of a binary tree.
//!
//! Slot `i` holds the node at that position: its left child lives at `2i+1`,
//! its right child at `2i+2`. `None` marks a gap, which lets sparse shapes be
//! expressed without filling every slot.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,\[\]]+").expect("separator pattern is valid"));

const ABSENT_WORDS: [&str; 3] = ["none", "null", "nil"];
const ABSENT_SYMBOLS: [&str; 2] = ["_", "~"];

pub fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

pub fn right_child_index(index: usize) -> usize {
    2 * index + 2
}

/// Parent slot of `index`, None for the root.
pub fn parent_index(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

pub fn is_left_child(index: usize) -> bool {
    index % 2 == 1
}

/// Number of slots in a perfect tree of the given height: `2^(height+1) - 1`.
///
/// Saturates at `usize::MAX` for heights that do not fit.
pub fn full_tree_size(height: u32) -> usize {
    height
        .checked_add(1)
        .and_then(|shift| 1usize.checked_shl(shift))
        .map_or(usize::MAX, |slots| slots - 1)
}

/// Level of a slot, the root being level 0.
pub fn level_of(index: usize) -> u32 {
    (index + 1).ilog2()
}

fn is_absent(token: &str) -> bool {
    ABSENT_SYMBOLS.contains(&token) || ABSENT_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token))
}

/// Parses the text form of a representation.
///
/// Accepts `[0, 1, None, 3]`, `0,1,_,3` and `0 1 null 3` alike.
#[instrument(level = "debug", skip(input))]
pub fn parse_representation<V: FromStr>(input: &str) -> DomainResult<Vec<Option<V>>> {
    SEPARATOR
        .split(input)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            if is_absent(token) {
                Ok(None)
            } else {
                token
                    .parse::<V>()
                    .map(Some)
                    .map_err(|_| DomainError::InvalidToken {
                        position,
                        token: token.to_string(),
                    })
            }
        })
        .collect()
}

/// Formats a representation as `[0, 1, None, 3]`.
pub fn format_representation<V: fmt::Display>(representation: &[Option<V>]) -> String {
    let slots = representation
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => "None".to_string(),
        })
        .join(", ");
    format!("[{}]", slots)
}
