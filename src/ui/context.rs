use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use bce_cert_cleaner::config::{ColorMode, Config};
use bce_cert_cleaner::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            caps,
            color,
            unicode,
        }
    }
}

#[cfg(test)]
impl UiContext {
    /// No color, ASCII only
    pub(crate) fn plain(width: u16) -> Self {
        Self {
            caps: TerminalCapabilities {
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
                width,
            },
            color: false,
            unicode: false,
        }
    }
}
