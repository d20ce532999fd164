//! `hash-password` command.
//!
//! Prints the value to store in `mb-pwdhash` or `blog.Password`.

use anyhow::Result;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::commands::password_or_prompt;

#[derive(Serialize)]
struct HashOutput<'a> {
    salt: &'a str,
    hash: String,
}

pub fn run(salt: &str, password: Option<String>, output: OutputFormat) -> Result<()> {
    let password = password_or_prompt(password, "Password")?;
    let hash = miniblog_config::hash_password(password.expose_secret(), salt);

    match output {
        OutputFormat::Text => println!("{}", hash),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&HashOutput { salt, hash })?)
        }
    }
    Ok(())
}
