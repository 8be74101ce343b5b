//! Side-by-side frame composition.

use std::fmt;

use crate::ui::primitives::text::pad_right;

/// Columns between the two panels.
pub const GAP_WIDTH: usize = 8;

/// One full screen of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Lay `left` and `right` side by side.
///
/// The shorter column is padded with blank lines; every left line is padded
/// to `left_width` visible columns and followed by a fixed gap.
pub fn compose(left: &[String], right: &[String], left_width: usize) -> Frame {
    let height = left.len().max(right.len());
    let gap = " ".repeat(GAP_WIDTH);
    let lines = (0..height)
        .map(|row| {
            let l = left.get(row).map(String::as_str).unwrap_or("");
            let r = right.get(row).map(String::as_str).unwrap_or("");
            format!("{}{}{}", pad_right(l, left_width), gap, r)
                .trim_end()
                .to_string()
        })
        .collect();
    Frame::new(lines)
}
