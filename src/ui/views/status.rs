use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(
    base_url: &str,
    available: Result<(), String>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Status, "License service");
    header.add("URL", base_url);
    let mut out = header.render(supports_color, supports_unicode);

    let line = match available {
        Ok(()) => format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("available").render(supports_color)
        ),
        Err(reason) => format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(reason).render(supports_color)
        ),
    };
    out.push_str(&line);
    out.push('\n');
    out
}
