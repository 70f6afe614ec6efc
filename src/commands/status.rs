use anyhow::Result;

use railgen::config::Config;
use railgen::domain::ports::CatalogProvider;
use railgen::presentation::create_license_api;

use crate::ui::context::UiContext;

/// Probe the license service; returns whether it is available.
pub fn cmd_status(config: &Config, ui: &UiContext) -> Result<bool> {
    let api = create_license_api(config)?;
    let result = api.check_available().map_err(|e| e.to_string());
    let available = result.is_ok();

    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "status",
            "url": api.base_url().as_str(),
            "available": available,
            "message": result.as_ref().err(),
        }));
    } else {
        print!(
            "{}",
            crate::ui::views::status::render_status(
                api.base_url().as_str(),
                result,
                ui.color,
                ui.unicode
            )
        );
    }

    Ok(available)
}
