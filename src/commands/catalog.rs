use anyhow::Result;

use railgen::config::Config;
use railgen::domain::ports::CatalogProvider;
use railgen::presentation::create_license_api;
use railgen::Catalog;

use crate::ui::context::UiContext;

pub fn cmd_catalog(config: &Config, ui: &UiContext) -> Result<()> {
    let api = create_license_api(config)?;
    let catalog = api
        .fetch_catalog()?
        .into_catalog(&config.catalog.locked_source)?;

    if ui.json {
        crate::ui::json::emit(catalog_json(&catalog))?;
    } else {
        print!(
            "{}",
            crate::ui::views::catalog::render_catalog(&catalog, ui.color, ui.unicode)
        );
    }
    Ok(())
}

fn catalog_json(catalog: &Catalog) -> serde_json::Value {
    let restrictions: Vec<serde_json::Value> = catalog
        .restrictions()
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "text": r.text,
                "domain_id": r.domain_id,
                "source_id": r.source_id,
                "locked": catalog.is_locked(r.id),
            })
        })
        .collect();

    serde_json::json!({
        "event": "catalog",
        "locked_source": catalog.locked_source().name,
        "domains": catalog.domains(),
        "sources": catalog.sources(),
        "restrictions": restrictions,
    })
}
