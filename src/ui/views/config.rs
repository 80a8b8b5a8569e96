//! Configuration notices

use bce_cert_cleaner::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut block = WarningBlock::new("Unknown config keys");
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let mut line = format!("{} in {}", warning.key, location);
        if let Some(suggestion) = &warning.suggestion {
            line.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        block.add_item(line);
    }
    block
        .with_hint("These keys are ignored; every other setting still applies")
        .render(ui.color, ui.unicode)
}
