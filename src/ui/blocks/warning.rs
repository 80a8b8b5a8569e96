//! Non-fatal notices printed before a run starts

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed list of notices with an optional closing hint
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    items: Vec<String>,
    hint: Option<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            hint: None,
        }
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let bullet = if supports_unicode { "•" } else { "-" };
        let title = format!(
            "{} {} ({})",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title,
            self.items.len()
        );

        let mut b = Box::with_title(title).style(BoxStyle::Warning);
        for item in &self.items {
            b.add_line(format!("{} {}", bullet, item));
        }
        if let Some(hint) = &self.hint {
            b.add_empty();
            b.add_line(hint.clone());
        }
        b.render(supports_color, supports_unicode)
    }
}
