use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_banner(supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_style(BoxStyle::Info);
    b.add_empty();
    b.add_line("  railgen - Responsible AI Licenses");
    b.add_empty();
    b.add_line("  Pick what you are licensing, choose the use");
    b.add_line("  restrictions, and get a ready-to-ship license.");
    b.add_empty();
    b.render(supports_color, supports_unicode)
}

pub fn render_step(step: usize, total: usize, title: &str, supports_color: bool) -> String {
    format!(
        "\n{} {}\n",
        ColoredText::dim(format!("[{step}/{total}]")).render(supports_color),
        ColoredText::info(title).bold().render(supports_color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_uses_box_borders_in_ascii_mode() {
        let rendered = render_banner(false, false);
        assert!(rendered.lines().next().unwrap_or_default().starts_with('+'));
    }

    #[test]
    fn step_header_counts() {
        assert_eq!(render_step(2, 5, "License type", false), "\n[2/5] License type\n");
    }
}
