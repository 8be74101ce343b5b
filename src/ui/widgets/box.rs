use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::{pad_right, visible_width, ColoredText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Muted,
    Highlight,
}

/// Rounded, titled panel for full-screen text (help, banner).
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    width: Option<usize>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_style(style: BoxStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Fix the inner width instead of fitting the widest line.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let widest = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(|l| visible_width(l) + 2)
            .max()
            .unwrap_or(0);
        let inner_width = self.width.unwrap_or(widest).max(widest).max(2);

        let tl = BorderChar::RoundTopLeft.render(supports_unicode);
        let tr = BorderChar::RoundTopRight.render(supports_unicode);
        let bl = BorderChar::RoundBottomLeft.render(supports_unicode);
        let br = BorderChar::RoundBottomRight.render(supports_unicode);
        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = self.paint(BorderChar::Vertical.render(supports_unicode), supports_color);

        let mut out = String::new();
        let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
        out.push_str(&self.paint(&top, supports_color));
        out.push('\n');

        if let Some(title) = &self.title {
            let styled = ColoredText::title(title.as_str())
                .bold()
                .render(supports_color);
            let free = inner_width.saturating_sub(visible_width(title));
            let left = free / 2;
            out.push_str(&format!(
                "{}{}{}{}\n",
                v,
                " ".repeat(left),
                pad_right(&styled, inner_width - left),
                v
            ));
            let rule = format!(
                "{}{}{}",
                BorderChar::TeeRight.render(supports_unicode),
                h.repeat(inner_width),
                BorderChar::TeeLeft.render(supports_unicode)
            );
            out.push_str(&self.paint(&rule, supports_color));
            out.push('\n');
        }

        for line in &self.content {
            out.push_str(&format!(
                "{} {}{}\n",
                v,
                pad_right(line, inner_width - 1),
                v
            ));
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);
        out.push_str(&self.paint(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        match self.style {
            BoxStyle::Muted => ColoredText::border(s).render(supports_color),
            BoxStyle::Highlight => ColoredText::title(s).render(supports_color),
        }
    }
}
