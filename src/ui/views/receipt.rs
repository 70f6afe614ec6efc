use std::path::Path;

use railgen::domain::ports::LicenseReceipt;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Outcome of a submission as shown to the user
pub struct ReceiptView<'a> {
    pub receipt: &'a LicenseReceipt,
    pub label: &'a str,
    /// False when identical terms were already stored this session
    pub submitted: bool,
    pub url: &'a str,
    pub written: Option<&'a Path>,
}

pub fn render_receipt(view: &ReceiptView<'_>, supports_color: bool, supports_unicode: bool) -> String {
    let heading = if view.submitted {
        format!("License {} stored", view.label)
    } else {
        format!("License {} unchanged", view.label)
    };
    let mut b = Box::with_title(format!(
        "{} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        heading
    ))
    .style(BoxStyle::Success);

    b.add_line(format!(
        "{} {}",
        ColoredText::dim("Id:").render(supports_color),
        view.receipt.id
    ));
    b.add_line(format!(
        "{} {}",
        ColoredText::dim("Text:").render(supports_color),
        view.url
    ));
    if let Some(path) = view.written {
        b.add_line(format!(
            "{} {}",
            Icon::Download.colored(supports_color, supports_unicode),
            path.display()
        ));
    }
    b.render(supports_color, supports_unicode)
}
