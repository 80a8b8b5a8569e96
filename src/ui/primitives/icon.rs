use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skip,
    Progress,
    Arrow,
    Prompt,
    Clean,
    List,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};

        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Skip => (icons::SKIP, icons_ascii::SKIP),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Prompt => (icons::PROMPT, icons_ascii::PROMPT),
            Icon::Clean => (icons::CLEAN, icons_ascii::CLEAN),
            Icon::List => (icons::LIST, icons_ascii::LIST),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Prompt => theme::colors::WARNING,
            Icon::Skip | Icon::Arrow => theme::colors::DIM,
            Icon::Progress | Icon::Clean | Icon::List => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
