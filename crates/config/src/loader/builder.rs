//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that gathers the two settings sources.
//! - Choose the source once: environment when complete, otherwise the settings document.
//! - Produce the single `SettingsSnapshot` used for the rest of the process.
//!
//! Does NOT handle:
//! - Validating individual environment keys (delegated to env.rs).
//! - Parsing the settings document (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - The environment source takes precedence over the settings document.
//! - The settings document is read only if the environment source is rejected.
//! - `resolve()` consumes the loader, so a loader resolves at most once.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading, and before `from_env()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::convert::Infallible;
use std::path::PathBuf;

use super::env::{EnvSnapshot, resolve_from_environment};
use super::error::ConfigError;
use super::file::{AppSettings, resolve_from_configuration};
use super::path::default_config_path;
use crate::snapshot::SettingsSnapshot;
use crate::types::SettingsSource;

/// Loader that resolves blog settings from the environment or a settings document.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    env: Option<EnvSnapshot>,
    config_path: Option<PathBuf>,
    app_settings: Option<AppSettings>,
}

impl ConfigLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Capture the process environment as the environment source.
    ///
    /// The environment is read here, once; later changes are not observed.
    pub fn from_env(mut self) -> Self {
        self.env = Some(EnvSnapshot::capture());
        self
    }

    /// Use an explicit environment snapshot (primarily for testing).
    pub fn with_env(mut self, env: EnvSnapshot) -> Self {
        self.env = Some(env);
        self
    }

    /// Override the settings document path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Use an already-parsed settings document instead of reading one from disk.
    pub fn with_app_settings(mut self, app_settings: AppSettings) -> Self {
        self.app_settings = Some(app_settings);
        self
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Resolve the settings snapshot.
    ///
    /// # Errors
    ///
    /// Only when the environment source is rejected and the settings document
    /// cannot be located, read or parsed.
    pub fn resolve(self) -> Result<SettingsSnapshot, ConfigError> {
        let env = self.env.unwrap_or_default();
        let app_settings = self.app_settings;
        let config_path = self.config_path;

        resolve_with(&env, move || match app_settings {
            Some(app_settings) => Ok(app_settings),
            None => {
                let path = match config_path {
                    Some(path) => path,
                    None => default_config_path()
                        .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
                };
                tracing::debug!(path = %path.display(), "reading settings document");
                AppSettings::from_path(&path)
            }
        })
    }
}

/// Resolve settings from an environment snapshot and a parsed settings document.
///
/// Environment wins when every `mb-*` key is valid; otherwise the document's
/// `blog` section (with defaults) is used.
pub fn resolve(vars: &EnvSnapshot, config: &AppSettings) -> SettingsSnapshot {
    match resolve_with(vars, || Ok::<_, Infallible>(config.clone())) {
        Ok(snapshot) => snapshot,
        Err(never) => match never {},
    }
}

fn resolve_with<E>(
    vars: &EnvSnapshot,
    load_document: impl FnOnce() -> Result<AppSettings, E>,
) -> Result<SettingsSnapshot, E> {
    match resolve_from_environment(vars) {
        Ok(settings) => {
            tracing::info!(source = %SettingsSource::Environment, "blog settings resolved");
            return Ok(SettingsSnapshot::new(settings, SettingsSource::Environment));
        }
        Err(rejection) => {
            tracing::debug!(
                reason = %rejection,
                "environment settings incomplete, falling back to settings document"
            );
        }
    }

    let settings = resolve_from_configuration(&load_document()?);
    tracing::info!(source = %SettingsSource::Configuration, "blog settings resolved");
    Ok(SettingsSnapshot::new(
        settings,
        SettingsSource::Configuration,
    ))
}
