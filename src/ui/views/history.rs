//! Scrolling command panel shown left of the pyramid.

use crate::session::history::{EntryKind, History, HISTORY_ROWS};
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::{pad_right, truncate, ColoredText};
use crate::ui::theme;

/// Total panel width including both borders.
pub const PANEL_WIDTH: usize = 32;

const TITLE: &str = " COMMAND ";
const TITLE_OFFSET: usize = 7;

/// Render the panel: a titled top border, `HISTORY_ROWS` rows and a bottom
/// border, every line exactly `PANEL_WIDTH` columns wide.
pub fn render_history(history: &History, supports_color: bool, supports_unicode: bool) -> Vec<String> {
    let inner = PANEL_WIDTH - 2;
    let text_width = inner - 2;
    let h = BorderChar::Horizontal.render(supports_unicode);
    let bar = ColoredText::border(BorderChar::Vertical.render(supports_unicode)).render(supports_color);

    let prompt = if supports_unicode {
        theme::glyphs::PROMPT
    } else {
        theme::glyphs_ascii::PROMPT
    };

    let mut lines = Vec::with_capacity(HISTORY_ROWS + 2);
    let top = format!(
        "{}{}{}{}{}",
        BorderChar::TopLeft.render(supports_unicode),
        h.repeat(TITLE_OFFSET),
        TITLE,
        h.repeat(inner - TITLE_OFFSET - TITLE.len()),
        BorderChar::TopRight.render(supports_unicode)
    );
    lines.push(ColoredText::border(top).render(supports_color));

    let window = history.window(HISTORY_ROWS);
    for row in 0..HISTORY_ROWS {
        let cell = match window.get(row) {
            Some(entry) => {
                let normalized = entry.text.replace('\t', " ");
                let text = truncate(&normalized, text_width);
                match entry.kind {
                    EntryKind::Input => text.to_string(),
                    EntryKind::Result => ColoredText::result(text).render(supports_color),
                    EntryKind::Error => ColoredText::error(text).render(supports_color),
                }
            }
            None if row == window.len() => prompt.to_string(),
            None => String::new(),
        };
        lines.push(format!("{} {} {}", bar, pad_right(&cell, text_width), bar));
    }

    let bottom = format!(
        "{}{}{}",
        BorderChar::BottomLeft.render(supports_unicode),
        h.repeat(inner),
        BorderChar::BottomRight.render(supports_unicode)
    );
    lines.push(ColoredText::border(bottom).render(supports_color));
    lines
}
