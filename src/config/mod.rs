//! Configuration module for railgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RAILGEN_*)
//! 3. Project config (./railgen.toml) or an explicit `--config` file
//! 4. User config (~/.config/railgen/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, parse_with_warnings, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ApiConfig, CatalogConfig, ColorMode, Config, LicenseConfig, OutputConfig};
