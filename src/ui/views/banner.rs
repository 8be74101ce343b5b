use crate::domain::Variant;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_banner(supports_color: bool, supports_unicode: bool) -> String {
    let sparkle = if supports_unicode {
        theme::glyphs::SPARKLE
    } else {
        theme::glyphs_ascii::SPARKLE
    };

    let mut b = Box::with_style(BoxStyle::Highlight);
    b.add_empty();
    b.add_line(format!(
        "   {} {} {}",
        sparkle,
        ColoredText::title("S E G E E").bold().render(supports_color),
        sparkle
    ));
    b.add_empty();
    b.add_line("   CUI Segment Tree Calculator   ");
    b.add_empty();
    b.render(supports_color, supports_unicode)
}

/// Numbered variant list shown by the line-based menu.
pub fn menu_items() -> Vec<String> {
    Variant::ALL.iter().map(|v| v.title().to_string()).collect()
}

/// Text shown between selecting a variant and entering the loop.
pub fn render_instructions(variant: Variant, supports_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nSelected: {}\n",
        ColoredText::title(variant.title()).bold().render(supports_color)
    ));
    out.push_str(
        "\nCommands: set/s <index> <value>, add/a <index> <value>, query/q <left> <right> (half-open)\n",
    );
    out.push_str("Special: /reset (clear), /home (return here), /help (show commands)\n");
    out.push_str("All indices are 0-based. Press Ctrl+C to exit.\n");
    out
}
