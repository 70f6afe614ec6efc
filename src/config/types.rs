//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::RAIL_INITIATIVE;
use crate::domain::value_objects::{LicenseType, MediaType};
use crate::error::RailResult;
use crate::infrastructure::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use super::loader::{self, ConfigWarning};

/// License service connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Source whose restrictions are mandatory in every license
    #[serde(default = "default_locked_source")]
    pub locked_source: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locked_source: default_locked_source(),
        }
    }
}

fn default_locked_source() -> String {
    RAIL_INITIATIVE.to_string()
}

/// Defaults for new licenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LicenseConfig {
    #[serde(default)]
    pub default_type: LicenseType,

    #[serde(default)]
    pub media_type: MediaType,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub license: LicenseConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RailResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RailResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config hierarchy and apply `RAILGEN_*` overrides.
    ///
    /// `explicit` (from `--config`) must exist; the project and user files
    /// are optional.
    pub fn load_layered(explicit: Option<&Path>) -> RailResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit)
    }

    /// Apply environment variable overrides (RAILGEN_* prefix)
    pub fn with_env_overrides(self) -> RailResult<Self> {
        loader::with_env_overrides(self)
    }
}
