use railgen::Catalog;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_catalog(catalog: &Catalog, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    let locked = catalog.locked_source();
    out.push_str(&format!(
        "{} {} ({} sources, {} restrictions)\n",
        Icon::Catalog.colored(supports_color, supports_unicode),
        ColoredText::info("Restriction catalog").bold().render(supports_color),
        catalog.sources().len(),
        catalog.restrictions().len()
    ));
    out.push_str(&format!(
        "{} {}\n",
        ColoredText::dim("Mandatory source:").render(supports_color),
        locked.name
    ));

    for domain in catalog.domains() {
        let mut rows = catalog
            .restrictions()
            .iter()
            .filter(|r| r.domain_id == domain.id)
            .peekable();
        if rows.peek().is_none() {
            continue;
        }

        out.push('\n');
        out.push_str(&ColoredText::plain(domain.name.as_str()).bold().render(supports_color));
        out.push('\n');
        for r in rows {
            let source = catalog
                .source(r.source_id)
                .map(|s| s.name.as_str())
                .unwrap_or_default();
            let marker = if catalog.is_locked(r.id) {
                Icon::Locked.colored(supports_color, supports_unicode)
            } else {
                Icon::Pending.colored(supports_color, supports_unicode)
            };
            out.push_str(&format!(
                "  {} {:>4}  {} {}\n",
                marker,
                r.id.get(),
                r.text,
                ColoredText::dim(format!("({source})")).render(supports_color)
            ));
        }
    }
    out
}
