//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings resolution (see `main()`).
//!
//! Invariants:
//! - Commands that need settings always receive a snapshot.

use anyhow::{Result, anyhow};
use miniblog_config::SettingsSnapshot;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, snapshot: Option<SettingsSnapshot>) -> Result<()> {
    let output = cli.output;

    match cli.command {
        Commands::HashPassword { salt, password } => {
            commands::hash_password::run(&salt, password, output)
        }
        Commands::Show => commands::show::run(&require(snapshot)?, output),
        Commands::Verify { username, password } => {
            commands::verify::run(require(snapshot)?, &username, password, output)
        }
        Commands::Manifest => commands::manifest::run(&require(snapshot)?),
    }
}

fn require(snapshot: Option<SettingsSnapshot>) -> Result<SettingsSnapshot> {
    snapshot.ok_or_else(|| anyhow!("settings were not resolved for this command"))
}
