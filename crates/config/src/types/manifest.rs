//! Web app manifest derived from blog settings.
//!
//! Responsibilities:
//! - Build the PWA manifest that replaces the static one when settings come from the environment.
//! - Validate the manifest members a browser requires before it is published.
//!
//! Does NOT handle:
//! - Serving the manifest over HTTP.
//! - Deciding when the dynamic manifest applies (see `SettingsSnapshot::dynamic_manifest`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::settings::Settings;

const BACKGROUND_COLOR: &str = "#fff";
const THEME_COLOR: &str = "#fff";
const START_URL: &str = "/";
const DISPLAY: &str = "standalone";
const DISPLAY_MODES: [&str; 4] = ["fullscreen", "standalone", "minimal-ui", "browser"];

/// Reasons a manifest cannot be published.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("settings did not come from the environment; the static manifest applies")]
    NotFromEnvironment,

    #[error("manifest name is required")]
    MissingName,

    #[error("manifest short_name is required")]
    MissingShortName,

    #[error("manifest start_url is required")]
    MissingStartUrl,

    #[error("unsupported display mode: {0}")]
    InvalidDisplay(String),

    #[error("manifest must declare at least one icon")]
    MissingIcons,

    #[error("icon {index} is missing src or sizes")]
    InvalidIcon { index: usize },
}

/// A manifest icon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub src: String,
    pub sizes: String,
}

impl Icon {
    fn new(src: &str, sizes: &str) -> Self {
        Self {
            src: src.to_string(),
            sizes: sizes.to_string(),
        }
    }
}

/// W3C web app manifest members used by the blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub background_color: String,
    pub theme_color: String,
    pub start_url: String,
    pub display: String,
    pub icons: Vec<Icon>,
}

impl WebManifest {
    /// Build the manifest for the given settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: settings.name.clone(),
            short_name: settings.short_name.clone(),
            description: settings.description.clone(),
            background_color: BACKGROUND_COLOR.to_string(),
            theme_color: THEME_COLOR.to_string(),
            start_url: START_URL.to_string(),
            display: DISPLAY.to_string(),
            icons: vec![
                Icon::new("/img/icon192x192.png", "192x192"),
                Icon::new("/img/icon512x512.png", "512x512"),
            ],
        }
    }

    /// Check the members required for the manifest to be installable.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            return Err(ManifestError::MissingName);
        }
        if self.short_name.trim().is_empty() {
            return Err(ManifestError::MissingShortName);
        }
        if self.start_url.trim().is_empty() {
            return Err(ManifestError::MissingStartUrl);
        }
        if !DISPLAY_MODES.contains(&self.display.as_str()) {
            return Err(ManifestError::InvalidDisplay(self.display.clone()));
        }
        if self.icons.is_empty() {
            return Err(ManifestError::MissingIcons);
        }
        if let Some(index) = self
            .icons
            .iter()
            .position(|icon| icon.src.trim().is_empty() || icon.sizes.trim().is_empty())
        {
            return Err(ManifestError::InvalidIcon { index });
        }
        Ok(())
    }
}
