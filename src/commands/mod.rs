//! Subcommand handlers for the railgen binary

pub mod catalog;
pub mod download;
pub mod generate;
pub mod interactive;
pub mod status;

use railgen::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

/// One line per unknown config key, with a suggestion when one is close.
pub(crate) fn describe_warning(w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    match &w.suggestion {
        Some(s) => format!("Unknown key '{}' in {} (did you mean '{}'?)", w.key, location, s),
        None => format!("Unknown key '{}' in {}", w.key, location),
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() {
        return;
    }

    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    let mut block = WarningBlock::new("Config warnings");
    for w in warnings {
        block.add_line(describe_warning(w));
    }
    eprint!("{}", block.render(ui.color, ui.unicode));
}
