//! CLI command implementations.

pub mod hash_password;
pub mod manifest;
pub mod show;
pub mod verify;

use anyhow::{Context, Result};
use secrecy::SecretString;

/// Use the password given on the command line, or prompt for it.
pub(crate) fn password_or_prompt(
    password: Option<String>,
    prompt_text: &str,
) -> Result<SecretString> {
    if let Some(password) = password {
        return Ok(SecretString::new(password.into()));
    }

    let input = dialoguer::Password::new()
        .with_prompt(prompt_text)
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password (pass --password when not on a terminal)")?;
    Ok(SecretString::new(input.into()))
}
