//! Path helpers for the settings document location.
//!
//! Responsibilities:
//! - Determine the default settings document path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations (see file.rs).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::SETTINGS_FILE_NAME;

/// Returns the default path to the settings document.
///
/// - Linux: `~/.config/miniblog/appsettings.json`
/// - macOS: `~/Library/Application Support/miniblog/appsettings.json`
/// - Windows: `%AppData%\miniblog\config\appsettings.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "miniblog")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
}
