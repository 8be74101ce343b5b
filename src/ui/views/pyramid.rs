//! Pyramid view of the tree levels.
//!
//! Level `L` of a depth-`d` tree has `2^L` cells of width
//! `leaf_width * 2^(d - L)` (one column of which is the right border), so
//! every row spans `1 + 2^d * leaf_width` columns and each parent cell sits
//! exactly over its two children. Horizontal rules between levels are
//! shared and use junction glyphs where the vertical lines meet.

use crate::domain::{AggregateStructure, InternalView};
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::{center, ColoredText};
use crate::ui::theme;

pub const DEFAULT_LEAF_WIDTH: usize = 12;

/// Shown in every cell while no structure is bound.
const UNBOUND_CELL: &str = "0";

#[derive(Debug, Clone, Copy)]
pub struct PyramidView {
    depth: u32,
    leaf_width: usize,
    color: bool,
    unicode: bool,
}

impl PyramidView {
    /// `depth` is used only while no structure is bound; a bound structure
    /// brings its own depth.
    pub fn new(depth: u32, leaf_width: usize) -> Self {
        Self {
            depth,
            leaf_width: leaf_width.max(2),
            color: false,
            unicode: true,
        }
    }

    pub fn style(mut self, color: bool, unicode: bool) -> Self {
        self.color = color;
        self.unicode = unicode;
        self
    }

    pub fn render(&self, structure: Option<&dyn AggregateStructure>) -> Vec<String> {
        let depth = structure.map_or(self.depth, |s| depth_for(s.len()));
        let leaves = 1usize << depth;
        let total = leaves * self.leaf_width;
        let internals = structure.and_then(|s| s.internal_view());

        let mut lines = Vec::new();
        let mut above: Option<usize> = None;
        for level in 0..=depth {
            let cell = self.cell_width(depth, level);
            lines.push(self.rule(total, above, Some(cell)));
            lines.push(self.padding_row(leaves >> (depth - level), cell));

            let values: Vec<String> = (0..1usize << level)
                .map(|pos| {
                    resolve(structure, internals.as_ref(), depth, level, pos)
                        .unwrap_or_else(|| self.placeholder().to_string())
                })
                .collect();
            lines.push(self.content_row(&values, cell));
            lines.push(self.padding_row(values.len(), cell));
            above = Some(cell);
        }
        lines.push(self.rule(total, above, None));
        lines.push(self.index_row(leaves));
        lines
    }

    fn cell_width(&self, depth: u32, level: u32) -> usize {
        self.leaf_width << (depth - level)
    }

    /// Horizontal rule with vertical lines every `above` columns over it and
    /// every `below` columns under it.
    fn rule(&self, total: usize, above: Option<usize>, below: Option<usize>) -> String {
        let rule: String = (0..=total)
            .map(|x| {
                let up = above.is_some_and(|w| x % w == 0);
                let down = below.is_some_and(|w| x % w == 0);
                BorderChar::junction(up, down, x == 0, x == total).render(self.unicode)
            })
            .collect();
        ColoredText::border(rule).render(self.color)
    }

    fn placeholder(&self) -> &'static str {
        if self.unicode {
            theme::glyphs::PLACEHOLDER
        } else {
            theme::glyphs_ascii::PLACEHOLDER
        }
    }

    fn bar(&self) -> String {
        ColoredText::border(BorderChar::Vertical.render(self.unicode)).render(self.color)
    }

    fn padding_row(&self, cells: usize, width: usize) -> String {
        let bar = self.bar();
        let mut row = bar.clone();
        for _ in 0..cells {
            row.push_str(&" ".repeat(width - 1));
            row.push_str(&bar);
        }
        row
    }

    fn content_row(&self, values: &[String], width: usize) -> String {
        let bar = self.bar();
        let mut row = bar.clone();
        for value in values {
            let (left, text, right) = center(value, width - 1);
            row.push_str(&format!("{}{}{}", " ".repeat(left), text, " ".repeat(right)));
            row.push_str(&bar);
        }
        row
    }

    fn index_row(&self, leaves: usize) -> String {
        let mut row = String::from(" ");
        for i in 0..leaves {
            let label = i.to_string();
            let (left, text, right) = center(&label, self.leaf_width - 1);
            row.push_str(&" ".repeat(left));
            row.push_str(&ColoredText::index(text).render(self.color));
            row.push_str(&" ".repeat(right));
            if i + 1 < leaves {
                row.push(' ');
            }
        }
        row.trim_end().to_string()
    }
}

/// Smallest `d` with `2^d >= len`.
pub fn depth_for(len: usize) -> u32 {
    len.max(1).next_power_of_two().trailing_zeros()
}

/// Display text for the cell at `(level, pos)`, `None` if it cannot be
/// resolved.
///
/// Leaves read the element directly. Internal cells prefer the node array
/// and fall back to a range aggregate over the cell's span. Cells past the
/// end of the structure are blank.
fn resolve(
    structure: Option<&dyn AggregateStructure>,
    internals: Option<&InternalView<'_>>,
    depth: u32,
    level: u32,
    pos: usize,
) -> Option<String> {
    let Some(s) = structure else {
        return Some(UNBOUND_CELL.to_string());
    };

    if level == depth {
        if pos >= s.len() {
            return Some(String::new());
        }
        return s.get(pos).ok().map(|v| v.to_string());
    }

    let span = (1usize << depth) >> level;
    let left = pos * span;
    if left >= s.len() {
        return Some(String::new());
    }

    if let Some(value) = internals.and_then(|view| view.node(level, pos)) {
        return Some(value.to_string());
    }

    let right = (left + span).min(s.len());
    s.range_aggregate(left, right).ok().map(|v| v.to_string())
}
