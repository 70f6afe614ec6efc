//! License downloads
//!
//! Names and writes the generated license text fetched after submission.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::MediaType;
use crate::infrastructure::write_atomic;

/// Generated license text ready to be saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file_name: String,
    /// Shareable address the text was generated from
    pub url: String,
    pub media: MediaType,
    pub content: String,
}

/// `<name>_<label>.<ext>`, with characters that would escape the target
/// directory replaced by `_`.
pub fn download_file_name(name: &str, label: &str, media: MediaType) -> String {
    let name = sanitize(name);
    let name = if name.is_empty() { "license".to_string() } else { name };
    let label = sanitize(label);

    if label.is_empty() {
        format!("{}.{}", name, media.extension())
    } else {
        format!("{}_{}.{}", name, label, media.extension())
    }
}

fn sanitize(part: &str) -> String {
    let cleaned: String = part
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Write `download` into `dir`, returning the path written.
pub fn write_download(dir: &Path, download: &Download) -> std::io::Result<PathBuf> {
    let path = dir.join(&download.file_name);
    write_atomic(&path, download.content.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = download.content.len(), "license written");
    Ok(path)
}
