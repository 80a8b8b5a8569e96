use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
    Rule,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{borders, borders_ascii};

        let (unicode, ascii) = match self {
            BorderChar::TopLeft => (borders::TOP_LEFT, borders_ascii::TOP_LEFT),
            BorderChar::TopRight => (borders::TOP_RIGHT, borders_ascii::TOP_RIGHT),
            BorderChar::BottomLeft => (borders::BOTTOM_LEFT, borders_ascii::BOTTOM_LEFT),
            BorderChar::BottomRight => (borders::BOTTOM_RIGHT, borders_ascii::BOTTOM_RIGHT),
            BorderChar::Horizontal => (borders::HORIZONTAL, borders_ascii::HORIZONTAL),
            BorderChar::Vertical => (borders::VERTICAL, borders_ascii::VERTICAL),
            BorderChar::Rule => (borders::RULE, borders_ascii::RULE),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    /// `width` copies of this character
    pub fn line(&self, width: usize, supports_unicode: bool) -> String {
        self.render(supports_unicode).repeat(width)
    }
}
