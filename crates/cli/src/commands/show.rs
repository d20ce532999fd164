//! `show` command.
//!
//! Responsibilities:
//! - Print the resolved settings and which source produced them.
//!
//! Invariants:
//! - The password hash is never printed; only whether one is configured.

use anyhow::Result;
use miniblog_config::SettingsSnapshot;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::args::OutputFormat;

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    source: &'static str,
    owner: &'a str,
    posts_per_page: u32,
    comments_close_after_days: u32,
    username: &'a str,
    salt: &'a str,
    password_hash: Option<&'static str>,
    name: &'a str,
    short_name: &'a str,
    description: &'a str,
}

impl<'a> ShowOutput<'a> {
    fn from_snapshot(snapshot: &'a SettingsSnapshot) -> Self {
        let settings = snapshot.value();
        Self {
            source: snapshot.source().as_str(),
            owner: &settings.owner,
            posts_per_page: settings.posts_per_page.get(),
            comments_close_after_days: settings.comments_close_after_days.get(),
            username: &settings.username,
            salt: &settings.salt,
            password_hash: (!settings.password_hash.expose_secret().is_empty())
                .then_some(REDACTED),
            name: &settings.name,
            short_name: &settings.short_name,
            description: &settings.description,
        }
    }

    fn to_text(&self) -> String {
        let rows = [
            ("Source", self.source.to_string()),
            ("Owner", self.owner.to_string()),
            ("Posts per page", self.posts_per_page.to_string()),
            (
                "Comments close after (days)",
                self.comments_close_after_days.to_string(),
            ),
            ("Username", self.username.to_string()),
            ("Salt", self.salt.to_string()),
            (
                "Password hash",
                self.password_hash.unwrap_or("(not set)").to_string(),
            ),
            ("Name", self.name.to_string()),
            ("Short name", self.short_name.to_string()),
            ("Description", self.description.to_string()),
        ];

        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        rows.iter()
            .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn run(snapshot: &SettingsSnapshot, output: OutputFormat) -> Result<()> {
    let view = ShowOutput::from_snapshot(snapshot);
    match output {
        OutputFormat::Text => println!("{}", view.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
