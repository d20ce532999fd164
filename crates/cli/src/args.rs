//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve settings (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use miniblog_config::constants::CONFIG_PATH_ENV;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "miniblog")]
#[command(about = "Miniblog - inspect blog settings and check admin credentials", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  miniblog show\n  miniblog --output json show\n  miniblog hash-password --salt 9f2a\n  miniblog verify --username admin\n  miniblog --config ./appsettings.json manifest\n"
)]
pub struct Cli {
    /// Path to the settings document (overrides the default location).
    ///
    /// Can also be set via MINIBLOG_CONFIG_PATH environment variable.
    #[arg(long = "config", global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the blog settings and print them (password hash redacted)
    Show,

    /// Derive the stored password hash for a password and salt
    HashPassword {
        /// Salt to derive with (the value of mb-pwdsalt or blog.Salt)
        #[arg(long)]
        salt: String,

        /// Password to hash (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Check a username and password against the resolved settings
    Verify {
        /// Username to check
        #[arg(long)]
        username: String,

        /// Password to check (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Print the dynamic web manifest built from environment settings
    Manifest,
}

impl Commands {
    /// Whether the command needs resolved settings.
    pub fn needs_settings(&self) -> bool {
        !matches!(self, Commands::HashPassword { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "miniblog",
            "show",
            "--output",
            "json",
            "--config",
            "/tmp/appsettings.json",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Show));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(
            cli.config_path,
            Some(PathBuf::from("/tmp/appsettings.json"))
        );
    }

    #[test]
    fn test_hash_password_requires_salt() {
        assert!(Cli::try_parse_from(["miniblog", "hash-password"]).is_err());
    }

    #[test]
    fn test_needs_settings() {
        let cli = Cli::try_parse_from(["miniblog", "hash-password", "--salt", "s1"]).unwrap();
        assert!(!cli.command.needs_settings());

        let cli = Cli::try_parse_from(["miniblog", "verify", "--username", "admin"]).unwrap();
        assert!(cli.command.needs_settings());
    }
}
