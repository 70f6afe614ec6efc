//! Interactive command module
//!
//! Walks the user through composing a license when railgen runs without a
//! subcommand. Every prompt reads its defaults from the selection tracker
//! and writes the answer straight back into it.

#[cfg(test)]
mod tests;
mod wizard;

use anyhow::Result;

use railgen::config::Config;
use railgen::presentation::create_license_session;

use crate::ui::context::UiContext;

const NON_TTY_HINT: &str =
    "railgen needs an interactive terminal to compose a license.\nRun 'railgen generate --help' for the non-interactive command.";

pub fn cmd_interactive(config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.can_prompt() {
        if ui.json {
            crate::ui::json::emit(serde_json::json!({
                "event": "hint",
                "message": NON_TTY_HINT,
            }))?;
        } else {
            println!("{}", NON_TTY_HINT);
        }
        return Ok(());
    }

    let mut session = create_license_session(config)?;
    wizard::run_wizard(&mut session, config, ui)
}
