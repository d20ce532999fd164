//! `verify` command.
//!
//! Responsibilities:
//! - Check a username/password pair against the resolved settings.
//! - Report the outcome on stdout and through the exit code.
//!
//! Invariants:
//! - The submitted password is never printed or logged.

use anyhow::Result;
use miniblog_config::{CredentialVerifier, SettingsSnapshot};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::commands::password_or_prompt;
use crate::error::CommandError;

#[derive(Serialize)]
struct VerifyOutput<'a> {
    username: &'a str,
    valid: bool,
}

pub fn run(
    snapshot: SettingsSnapshot,
    username: &str,
    password: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let password = password_or_prompt(password, "Password")?;
    let verifier = CredentialVerifier::new(snapshot);
    let valid = verifier.validate(username, password.expose_secret());

    match output {
        OutputFormat::Text => {
            if valid {
                println!("Credentials are valid");
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&VerifyOutput { username, valid })?
        ),
    }

    if valid {
        Ok(())
    } else {
        Err(CommandError::InvalidCredentials.into())
    }
}
