//! Fixed-width ASCII diagram of a positional representation.
//!
//! ```text
//!      ____0____
//!     /         \
//!   _1_         _2_
//!  /   \       /   \
//! 3     4     5     6
//! ```
//!
//! Lines are built bottom-up: each level gets a value line and (except the root)
//! an arrow line. The `_` runs leading from a parent to its children are drawn
//! while the children's level is laid out and merged into the parent's value line.

use std::fmt;

use tracing::instrument;

use crate::domain::representation::{full_tree_size, level_of};

/// Renders `representation` with every value centered in a `value_width` cell.
///
/// Returns an empty string when the representation holds no value.
#[instrument(level = "debug", skip(representation))]
pub fn render<V: fmt::Display>(representation: &[Option<V>], value_width: usize) -> String {
    let Some(last_present) = representation.iter().rposition(Option::is_some) else {
        return String::new();
    };
    let height = level_of(last_present);
    let width = value_width.max(1);
    let line_width = full_tree_size(height).saturating_mul(width);

    let left_arrow = arrow(width, '/', true);
    let right_arrow = arrow(width, '\\', false);

    let mut lines: Vec<Vec<char>> = Vec::new();
    let mut outer = 0usize;
    let mut inner = 1usize;
    let mut child_bars = vec![' '; line_width];

    for level in (0..=height).rev() {
        let outer_pad = vec![' '; outer * width];
        let inner_pad = vec![' '; inner * width];
        let mut values = outer_pad.clone();
        let mut arrows = outer_pad.clone();
        let mut bars = vec![' '; line_width];

        let first = (1usize << level) - 1;
        let end = (1usize << (level + 1)) - 1;
        for index in first..end {
            if index > first {
                values.extend(&inner_pad);
                arrows.extend(&inner_pad);
            }
            match representation.get(index).and_then(Option::as_ref) {
                Some(value) => {
                    let at = arrows.len();
                    let (arrow, start, stop) = if index % 2 == 1 {
                        (&left_arrow, at + width, at + width + outer * width + width / 2)
                    } else {
                        (&right_arrow, (at + width / 2).saturating_sub((outer + 1) * width), at)
                    };
                    if index > 0 {
                        fill(&mut bars, start, stop, '_');
                    }
                    arrows.extend(arrow);
                    values.extend(format!("{:^width$}", value, width = width).chars());
                }
                None => {
                    values.extend(std::iter::repeat(' ').take(width));
                    arrows.extend(std::iter::repeat(' ').take(width));
                }
            }
        }

        values.extend(&outer_pad);
        arrows.extend(&outer_pad);
        overlay(&mut values, &child_bars);
        child_bars = bars;

        lines.push(values);
        if level > 0 {
            lines.push(arrows);
        }
        outer = inner;
        inner = 2 * inner + 1;
    }

    trim_margins(&mut lines);
    lines
        .iter()
        .rev()
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `  /` for a left child, `\  ` for a right child.
fn arrow(width: usize, glyph: char, pad_before: bool) -> Vec<char> {
    let pad = std::iter::repeat(' ').take(width - 1);
    if pad_before {
        pad.chain(std::iter::once(glyph)).collect()
    } else {
        std::iter::once(glyph).chain(pad).collect()
    }
}

fn fill(line: &mut [char], start: usize, stop: usize, glyph: char) {
    let stop = stop.min(line.len());
    if start < stop {
        line[start..stop].fill(glyph);
    }
}

/// Copies `bars` into the blank cells of `line`.
fn overlay(line: &mut [char], bars: &[char]) {
    for (cell, bar) in line.iter_mut().zip(bars) {
        if cell.is_whitespace() {
            *cell = *bar;
        }
    }
}

/// Removes the blank margin shared by all lines on both sides.
fn trim_margins(lines: &mut [Vec<char>]) {
    let leading = |line: &Vec<char>| line.iter().take_while(|c| c.is_whitespace()).count();
    let trailing = |line: &Vec<char>| line.iter().rev().take_while(|c| c.is_whitespace()).count();

    let left = lines.iter().map(leading).min().unwrap_or(0);
    let right = lines.iter().map(trailing).min().unwrap_or(0);
    for line in lines.iter_mut() {
        let keep = line.len().saturating_sub(right).max(left);
        line.truncate(keep);
        line.drain(..left);
    }
}
