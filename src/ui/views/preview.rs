use railgen::Preview;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_preview(
    preview: &Preview,
    width: u16,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = match &preview.title {
        Some(name) => format!("{}  {}", name, preview.license_label),
        None => preview.license_label.clone(),
    };
    let mut b = Box::with_title(format!(
        "{} {}",
        Icon::License.colored(supports_color, supports_unicode),
        title
    ))
    .style(BoxStyle::Info)
    .max_width(width);

    if !preview.specifications.is_empty() {
        let specs: Vec<&str> = preview
            .specifications
            .iter()
            .map(|s| s.display_name())
            .collect();
        b.add_line(format!("Covers: {}", specs.join(", ")));
    }

    let permissions: Vec<String> = preview
        .permissions
        .iter()
        .map(|line| {
            let icon = if line.granted {
                Icon::Success.colored(supports_color, supports_unicode)
            } else {
                Icon::Error.colored(supports_color, supports_unicode)
            };
            format!("{} {}", icon, line.permission.display_name())
        })
        .collect();
    b.add_line(permissions.join("   "));

    if !preview.badges.is_empty() {
        let badges: Vec<&str> = preview.badges.iter().map(|b| b.title.as_str()).collect();
        b.add_line(ColoredText::dim(badges.join(" | ")).render(supports_color));
    }

    for section in &preview.sections {
        b.add_empty();
        b.add_line(ColoredText::plain(section.domain.as_str()).bold().render(supports_color));
        for (n, restriction) in section.restrictions.iter().enumerate() {
            let marker = if restriction.locked {
                format!(" {}", Icon::Locked.colored(supports_color, supports_unicode))
            } else {
                String::new()
            };
            b.add_line(format!("  {}. {}{}", n + 1, restriction.text, marker));
        }
    }

    if preview.sections.is_empty() {
        b.add_empty();
        b.add_line(ColoredText::dim("No use restrictions selected").render(supports_color));
    }

    b.render(supports_color, supports_unicode)
}
