use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    max_width: Option<usize>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_style(style: BoxStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap content so the whole box fits in `columns`.
    pub fn max_width(mut self, columns: u16) -> Self {
        self.max_width = Some(columns as usize);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        // Borders and padding take four columns.
        let text_limit = self.max_width.map(|w| w.saturating_sub(4).max(8));

        let mut lines: Vec<String> = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for line in &self.content {
            match text_limit {
                Some(limit) => lines.extend(wrap(line, limit)),
                None => lines.push(line.clone()),
            }
        }

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let tl = BorderChar::TopLeft.render(supports_unicode);
        let tr = BorderChar::TopRight.render(supports_unicode);
        let bl = BorderChar::BottomLeft.render(supports_unicode);
        let br = BorderChar::BottomRight.render(supports_unicode);
        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = BorderChar::Vertical.render(supports_unicode);

        let mut out = String::new();
        let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
        out.push_str(&color_border(&top, supports_color, self.style));
        out.push('\n');

        for line in &lines {
            let w = visible_width(line);
            out.push_str(&color_border(v, supports_color, self.style));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(inner_width.saturating_sub(1).saturating_sub(w)));
            out.push_str(&color_border(v, supports_color, self.style));
            out.push('\n');
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);
        out.push_str(&color_border(&bottom, supports_color, self.style));
        out.push('\n');
        out
    }
}

/// Greedy word wrap on visible width; leading indentation is repeated on
/// continuation lines. Lines carrying ANSI escapes are left alone.
fn wrap(line: &str, limit: usize) -> Vec<String> {
    if line.contains('\u{1b}') || line.width() <= limit {
        return vec![line.to_string()];
    }

    let indent_len = line.len() - line.trim_start().len();
    let indent = &line[..indent_len];
    let mut out = Vec::new();
    let mut current = indent.to_string();

    for word in line.split_whitespace() {
        let sep = if current.trim().is_empty() { "" } else { " " };
        if current.width() + sep.len() + word.width() > limit && !current.trim().is_empty() {
            out.push(std::mem::replace(&mut current, format!("{indent}  ")));
            current.push_str(word);
            continue;
        }
        current.push_str(sep);
        current.push_str(word);
    }
    if !current.trim().is_empty() {
        out.push(current);
    }

    // A single word wider than the limit is hard-split.
    out.into_iter().flat_map(|l| hard_split(&l, limit)).collect()
}

fn hard_split(line: &str, limit: usize) -> Vec<String> {
    if line.width() <= limit {
        return vec![line.to_string()];
    }
    let mut out = Vec::new();
    let mut current = String::new();
    let mut width = 0;
    for c in line.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > limit {
            out.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(c);
        width += cw;
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
