use crate::domain::{Variant, TREE_SIZE};
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::r#box::{Box, BoxStyle};

const HELP_WIDTH: usize = 74;

/// Full-screen command reference for the active variant.
pub fn render_help(variant: Variant, supports_color: bool, supports_unicode: bool) -> String {
    let bullet = if supports_unicode {
        theme::glyphs::BULLET
    } else {
        theme::glyphs_ascii::BULLET
    };
    let arrow = if supports_unicode {
        theme::glyphs::ARROW
    } else {
        theme::glyphs_ascii::ARROW
    };
    let section = |name: &str| ColoredText::title(name).bold().render(supports_color);

    let mut b = Box::with_title(format!("SEGEE HELP - {} TREE", variant.name().to_uppercase()))
        .style(BoxStyle::Muted)
        .width(HELP_WIDTH);

    b.add_empty();
    b.add_line(section("BASIC COMMANDS"));
    b.add_line("  set/s <index> <value>    Set element at index to value");
    b.add_line("  add/a <index> <value>    Add value to element at index");
    b.add_line("  query/q <left> <right>   Query range [left, right) (half-open)");
    b.add_empty();
    b.add_line(section("SPECIAL COMMANDS"));
    b.add_line("  /reset                   Clear tree and command history");
    b.add_line("  /home                    Return to tree type selection");
    b.add_line("  /help                    Show this help screen");
    b.add_line("  quit/exit                Exit the program");
    b.add_empty();
    b.add_line(section("EXAMPLES"));
    b.add_line(format!("  s 0 10                   {} Set tree[0] = 10", arrow));
    b.add_line(format!("  s 3 inf                  {} Set tree[3] = inf (infinity)", arrow));
    b.add_line(format!(
        "  s 7 -inf                 {} Set tree[7] = -inf (negative infinity)",
        arrow
    ));
    b.add_line(format!("  a 5 -3                   {} Add -3 to tree[5]", arrow));
    b.add_line(format!(
        "  q 2 7                    {} Query range [2, 7) - indices 2,3,4,5,6",
        arrow
    ));
    b.add_empty();
    b.add_line(section("NOTES"));
    b.add_line(format!(
        "  {} Tree size: {} elements (indices 0-{})",
        bullet,
        TREE_SIZE,
        TREE_SIZE - 1
    ));
    b.add_line(format!("  {} All indices are 0-based", bullet));
    b.add_line(format!(
        "  {} Query range is [left, right) - left inclusive, right exclusive",
        bullet
    ));
    b.add_line(format!(
        "  {} {} returns the {} of the range",
        bullet,
        variant.title(),
        variant.aggregate_noun()
    ));
    b.add_empty();
    b.add_line(section("VISUALIZATION"));
    b.add_line(format!("  {} Bottom row: your data (indices 0-{})", bullet, TREE_SIZE - 1));
    b.add_line(format!("  {} Upper rows: internal tree nodes", bullet));
    b.add_line(format!("  {} Yellow numbers: array indices", bullet));
    b.add_line(format!("  {} Redrawn after every command", bullet));
    b.add_empty();

    let mut out = b.render(supports_color, supports_unicode);
    out.push('\n');
    out.push_str("Press Enter to return to interactive mode...");
    out
}
