//! Shared read-only access to the resolved settings.
//!
//! Responsibilities:
//! - Hold the single settings record produced at startup, plus its source.
//! - Hand the same record to every consumer, whatever name they ask for.
//! - Decide whether the dynamic web manifest replaces the static one.
//!
//! Invariants:
//! - There is no mutation path; clones share one `Arc<Settings>`.
//! - `get(name)` ignores `name`: a process has exactly one settings instance.

use std::sync::Arc;

use crate::types::{ManifestError, Settings, SettingsSource, WebManifest};

/// Cheap-to-clone handle to the resolved settings.
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    settings: Arc<Settings>,
    source: SettingsSource,
}

impl SettingsSnapshot {
    pub fn new(settings: Settings, source: SettingsSource) -> Self {
        Self {
            settings: Arc::new(settings),
            source,
        }
    }

    /// The resolved settings.
    pub fn value(&self) -> &Settings {
        &self.settings
    }

    /// The resolved settings; `name` is accepted for API compatibility and ignored.
    pub fn get(&self, _name: &str) -> &Settings {
        &self.settings
    }

    /// Which source produced the settings.
    pub fn source(&self) -> SettingsSource {
        self.source
    }

    /// Shared ownership of the settings record.
    pub fn shared(&self) -> Arc<Settings> {
        Arc::clone(&self.settings)
    }

    /// The manifest built from these settings, when it should replace the static one.
    ///
    /// Only environment-sourced settings publish a dynamic manifest, and only
    /// when it validates. The error says why the static manifest applies.
    pub fn dynamic_manifest(&self) -> Result<WebManifest, ManifestError> {
        if self.source != SettingsSource::Environment {
            return Err(ManifestError::NotFromEnvironment);
        }

        let manifest = WebManifest::from_settings(&self.settings);
        if let Err(e) = manifest.validate() {
            tracing::warn!(error = %e, "dynamic web manifest is invalid, keeping static manifest");
            return Err(e);
        }
        Ok(manifest)
    }
}
