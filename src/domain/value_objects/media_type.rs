//! Media type value object - format of a generated license download

use serde::{Deserialize, Serialize};

/// Text format the license service can render a license in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Plain,
    #[default]
    Markdown,
    Html,
}

impl MediaType {
    /// Value of the `media_type` query parameter
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Plain => "text/plain",
            MediaType::Markdown => "text/markdown",
            MediaType::Html => "text/html",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Plain => "txt",
            MediaType::Markdown => "md",
            MediaType::Html => "html",
        }
    }

    /// Accepts the variant name, the file extension or the mime type.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        let value = value.strip_prefix("text/").unwrap_or(&value);
        match value {
            "plain" | "txt" | "text" => Some(MediaType::Plain),
            "markdown" | "md" => Some(MediaType::Markdown),
            "html" | "htm" => Some(MediaType::Html),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_are_text() {
        assert_eq!(MediaType::Plain.mime(), "text/plain");
        assert_eq!(MediaType::Markdown.mime(), "text/markdown");
        assert_eq!(MediaType::Html.mime(), "text/html");
    }

    #[test]
    fn parse_accepts_extension_and_mime() {
        assert_eq!(MediaType::parse("md"), Some(MediaType::Markdown));
        assert_eq!(MediaType::parse("text/html"), Some(MediaType::Html));
        assert_eq!(MediaType::parse(" TXT "), Some(MediaType::Plain));
        assert_eq!(MediaType::parse("pdf"), None);
    }

    #[test]
    fn serde_lowercase() {
        let parsed: MediaType = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(parsed, MediaType::Html);
    }
}
