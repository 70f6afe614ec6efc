//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{LicenseType, MediaType};
use crate::error::{RailError, RailResult};

use super::types::Config;

pub const PROJECT_CONFIG_FILE: &str = "railgen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RailResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML `content`; `origin` only labels errors and warnings.
pub fn parse_with_warnings(content: &str, origin: &Path) -> RailResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RailError::InvalidConfig {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: origin.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path, else `./railgen.toml`, else the user config, else defaults
pub fn load_layered(explicit: Option<&Path>) -> RailResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = PathBuf::from(PROJECT_CONFIG_FILE);
            if project.exists() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.exists())
            }
        }
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config)?, warnings))
}

/// `~/.config/railgen/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("railgen").join("config.toml"))
}

/// Apply environment variable overrides (RAILGEN_* prefix)
pub fn with_env_overrides(config: Config) -> RailResult<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`, so tests need not touch the
/// process environment.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> RailResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("RAILGEN_API_URL") {
        config.api.base_url = url;
    }

    if let Some(source) = lookup("RAILGEN_LOCKED_SOURCE") {
        config.catalog.locked_source = source;
    }

    if let Some(secs) = lookup("RAILGEN_TIMEOUT_SECS") {
        config.api.timeout_secs = secs
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|s| *s > 0)
            .ok_or(RailError::InvalidValue {
                field: "RAILGEN_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
    }

    if let Some(kind) = lookup("RAILGEN_LICENSE_TYPE") {
        config.license.default_type =
            LicenseType::parse(&kind).ok_or(RailError::InvalidValue {
                field: "RAILGEN_LICENSE_TYPE",
                value: kind.clone(),
            })?;
    }

    if let Some(media) = lookup("RAILGEN_MEDIA_TYPE") {
        config.license.media_type = MediaType::parse(&media).ok_or(RailError::InvalidValue {
            field: "RAILGEN_MEDIA_TYPE",
            value: media.clone(),
        })?;
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api",
        "base_url",
        "timeout_secs",
        "catalog",
        "locked_source",
        "license",
        "default_type",
        "media_type",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
