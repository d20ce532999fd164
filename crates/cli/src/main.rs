//! Miniblog CLI - inspect blog settings and check admin credentials.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the blog settings once and hand the snapshot to the command.
//! - Map command outcomes to structured exit codes.
//!
//! Does NOT handle:
//! - Settings resolution rules or hashing (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults and `mb-*` keys.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use miniblog_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let snapshot = if cli.command.needs_settings() {
        let mut loader = ConfigLoader::new().from_env();

        // Blank/whitespace-only values are ignored to fall back to the default location
        if let Some(ref path) = cli.config_path
            && !path.to_string_lossy().trim().is_empty()
        {
            loader = loader.with_config_path(path.clone());
        }

        match loader.resolve().context("Failed to resolve blog settings") {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(e.exit_code().as_i32());
            }
        }
    } else {
        None
    };

    let exit_code = match run_command(cli, snapshot) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
