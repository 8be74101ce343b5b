use std::borrow::Cow;
use std::fmt;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Border,
    Index,
    Result,
    Error,
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: SemanticColor,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn border(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Border)
    }

    pub fn index(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Index)
    }

    pub fn result(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Result)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Error)
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Title)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || self.text.is_empty() {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().with(match self.color {
            SemanticColor::Border => theme::colors::BORDER,
            SemanticColor::Index => theme::colors::INDEX,
            SemanticColor::Result => theme::colors::RESULT,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Title => theme::colors::TITLE,
        });

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Terminal columns taken by `s`, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

/// Cut plain text to at most `width` columns.
pub fn truncate(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Right-pad a (possibly styled) string with spaces to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Fit plain text into exactly `width` columns, centered; the extra column
/// of an odd split goes to the right.
pub fn center(s: &str, width: usize) -> (usize, &str, usize) {
    let text = truncate(s, width);
    let free = width - text.width();
    let left = free / 2;
    (left, text, free - left)
}
