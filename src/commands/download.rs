use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use railgen::application::{download_file_name, write_download, Download};
use railgen::config::Config;
use railgen::domain::ports::LicenseService;
use railgen::domain::value_objects::{LicenseId, MediaType};
use railgen::presentation::create_license_api;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub id: String,
    pub format: Option<MediaType>,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub label: Option<String>,
}

/// Fetch the generated text of a license stored earlier, by id.
pub fn cmd_download(opts: DownloadOptions, config: &Config, ui: &UiContext) -> Result<()> {
    let api = create_license_api(config)?;
    let id = LicenseId::new(opts.id.trim());
    let media = opts.format.unwrap_or(config.license.media_type);

    let content = api.generate(&id, media)?;
    let download = Download {
        file_name: download_file_name(
            opts.name.as_deref().unwrap_or(id.as_str()),
            opts.label.as_deref().unwrap_or_default(),
            media,
        ),
        url: api.generate_url(&id, media),
        media,
        content,
    };

    let Some(dir) = &opts.output else {
        if ui.json {
            crate::ui::json::emit_event("download", &download)?;
        } else {
            let mut out = std::io::stdout().lock();
            out.write_all(download.content.as_bytes())?;
            if !download.content.ends_with('\n') {
                out.write_all(b"\n")?;
            }
        }
        return Ok(());
    };

    let path = write_download(dir, &download)
        .with_context(|| format!("Failed to write license into {}", dir.display()))?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "download",
            "id": id,
            "url": download.url,
            "path": path.display().to_string(),
        }))?;
    } else {
        println!(
            "{} {}",
            Icon::Download.colored(ui.color, ui.unicode),
            path.display()
        );
    }
    Ok(())
}
