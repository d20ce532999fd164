//! `manifest` command.
//!
//! Prints the dynamic web manifest. Fails when the static manifest applies:
//! settings from the settings document, or a manifest that does not validate.

use anyhow::Result;
use miniblog_config::SettingsSnapshot;

use crate::error::CommandError;

pub fn run(snapshot: &SettingsSnapshot) -> Result<()> {
    let manifest = snapshot.dynamic_manifest().map_err(CommandError::from)?;

    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
