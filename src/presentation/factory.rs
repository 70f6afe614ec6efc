//! Use Case Factory
//!
//! Resolves configuration from CLI flags and wires the HTTP client into
//! the license session. This is the dependency injection point for the
//! application.

use std::time::Duration;

use anyhow::{Context, Result};

use super::cli::Cli;
use crate::application::{LicenseSession, SessionError};
use crate::config::{Config, ConfigWarning};
use crate::domain::ports::ServiceError;
use crate::infrastructure::HttpLicenseApi;

/// Session type used by the CLI
pub type HttpLicenseSession = LicenseSession<HttpLicenseApi>;

/// Load the layered config and apply CLI flag overrides (highest priority).
pub fn resolve_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = Config::load_layered(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    Ok((config, warnings))
}

pub fn create_license_api(config: &Config) -> Result<HttpLicenseApi> {
    HttpLicenseApi::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )
}

/// Load the catalog and start a session with the configured defaults.
///
/// One client serves both the catalog load and the later submissions.
pub fn create_license_session(config: &Config) -> Result<HttpLicenseSession> {
    let api = create_license_api(config)?;
    let loaded = LicenseSession::load(&api, &config.catalog.locked_source, api.clone());
    let mut session = match loaded {
        Err(SessionError::Service(err @ ServiceError::Unavailable { .. })) => {
            return Err(err).context("License service is not available");
        }
        other => other?,
    };
    session
        .tracker_mut()
        .select_license_type(config.license.default_type);
    Ok(session)
}
