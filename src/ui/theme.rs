use crossterm::style::Color;

/// Design tokens for the Segee console.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All glyphs and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// Tree and panel borders. #6B7280
    pub const BORDER: Color = Color::DarkGrey;
    /// Leaf index row under the pyramid. #F59E0B
    pub const INDEX: Color = Color::Yellow;
    /// Query results. #06B6D4
    pub const RESULT: Color = Color::Cyan;
    /// Rejected commands. #EF4444
    pub const ERROR: Color = Color::Red;
    /// Titles and the selected variant. #22C55E
    pub const TITLE: Color = Color::Green;
}

pub mod glyphs {
    pub const PROMPT: &str = ">";
    pub const SPARKLE: &str = "✦";
    pub const BULLET: &str = "•";
    pub const ARROW: &str = "→";
    pub const PLACEHOLDER: &str = "?";
}

pub mod glyphs_ascii {
    pub const PROMPT: &str = ">";
    pub const SPARKLE: &str = "*";
    pub const BULLET: &str = "-";
    pub const ARROW: &str = "->";
    pub const PLACEHOLDER: &str = "?";
}

/// Square box-drawing set used by the pyramid and the history panel.
pub mod borders {
    pub const TOP_LEFT: &str = "┌";
    pub const TOP_RIGHT: &str = "┐";
    pub const BOTTOM_LEFT: &str = "└";
    pub const BOTTOM_RIGHT: &str = "┘";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const TEE_DOWN: &str = "┬";
    pub const TEE_UP: &str = "┴";
    pub const TEE_RIGHT: &str = "├";
    pub const TEE_LEFT: &str = "┤";
    pub const CROSS: &str = "┼";
}

/// Rounded corners used by boxed screens (help, banner).
pub mod borders_rounded {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
}

pub mod borders_ascii {
    pub const CORNER: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
