use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
    TeeDown,
    TeeUp,
    TeeRight,
    TeeLeft,
    Cross,
    RoundTopLeft,
    RoundTopRight,
    RoundBottomLeft,
    RoundBottomRight,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if !supports_unicode {
            return match self {
                BorderChar::Horizontal => theme::borders_ascii::HORIZONTAL,
                BorderChar::Vertical => theme::borders_ascii::VERTICAL,
                _ => theme::borders_ascii::CORNER,
            };
        }

        match self {
            BorderChar::TopLeft => theme::borders::TOP_LEFT,
            BorderChar::TopRight => theme::borders::TOP_RIGHT,
            BorderChar::BottomLeft => theme::borders::BOTTOM_LEFT,
            BorderChar::BottomRight => theme::borders::BOTTOM_RIGHT,
            BorderChar::Horizontal => theme::borders::HORIZONTAL,
            BorderChar::Vertical => theme::borders::VERTICAL,
            BorderChar::TeeDown => theme::borders::TEE_DOWN,
            BorderChar::TeeUp => theme::borders::TEE_UP,
            BorderChar::TeeRight => theme::borders::TEE_RIGHT,
            BorderChar::TeeLeft => theme::borders::TEE_LEFT,
            BorderChar::Cross => theme::borders::CROSS,
            BorderChar::RoundTopLeft => theme::borders_rounded::TOP_LEFT,
            BorderChar::RoundTopRight => theme::borders_rounded::TOP_RIGHT,
            BorderChar::RoundBottomLeft => theme::borders_rounded::BOTTOM_LEFT,
            BorderChar::RoundBottomRight => theme::borders_rounded::BOTTOM_RIGHT,
        }
    }

    /// Glyph for a point on a horizontal rule given which vertical lines
    /// meet it from above and below.
    pub fn junction(up: bool, down: bool, left_edge: bool, right_edge: bool) -> BorderChar {
        match (left_edge, right_edge, up, down) {
            (true, _, false, _) => BorderChar::TopLeft,
            (true, _, true, true) => BorderChar::TeeRight,
            (true, _, true, false) => BorderChar::BottomLeft,
            (_, true, false, _) => BorderChar::TopRight,
            (_, true, true, true) => BorderChar::TeeLeft,
            (_, true, true, false) => BorderChar::BottomRight,
            (_, _, true, true) => BorderChar::Cross,
            (_, _, false, true) => BorderChar::TeeDown,
            (_, _, true, false) => BorderChar::TeeUp,
            (_, _, false, false) => BorderChar::Horizontal,
        }
    }
}
