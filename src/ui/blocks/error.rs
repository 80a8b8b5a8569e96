use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Fatal error with optional causes and fix hints
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    causes: Vec<String>,
    fix: Vec<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
            fix: Vec::new(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_fix(mut self, line: impl Into<String>) -> Self {
        self.fix.push(line.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);
        b.add_empty();
        b.add_line(self.message.clone());

        for cause in &self.causes {
            b.add_line(format!(
                "{} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                cause
            ));
        }

        if !self.fix.is_empty() {
            b.add_empty();
            b.add_line("FIX:");
            for line in &self.fix {
                b.add_line(format!("  {}", line));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_message_causes_and_fix() {
        let rendered = ErrorBlock::new("failed to list certificates")
            .with_cause("transport error: connection refused")
            .with_fix("check network access to certificate.baidubce.com")
            .render(false, false);

        assert!(rendered.contains("[FAIL] ERROR"));
        assert!(rendered.contains("failed to list certificates"));
        assert!(rendered.contains("[>] transport error: connection refused"));
        assert!(rendered.contains("FIX:"));
    }
}
