//! Blog settings snapshot types.
//!
//! Responsibilities:
//! - Define the resolved `Settings` record shared by every consumer.
//! - Record which source produced the record (`SettingsSource`).
//!
//! Does NOT handle:
//! - Reading the environment or the settings document (see `loader`).
//! - Verifying credentials (see `credentials`).
//!
//! Invariants:
//! - `posts_per_page` and `comments_close_after_days` are strictly positive (enforced by `NonZeroU32`).
//! - The configured password hash is held as a `SecretString` so it never shows up in `Debug` output.

use std::fmt;
use std::num::NonZeroU32;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMMENTS_CLOSE_AFTER_DAYS, DEFAULT_OWNER, DEFAULT_POSTS_PER_PAGE};

/// Resolved blog settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Display name of the blog owner.
    pub owner: String,
    /// Number of posts rendered per listing page.
    pub posts_per_page: NonZeroU32,
    /// Days after publication when a post stops accepting comments.
    pub comments_close_after_days: NonZeroU32,
    /// Login name of the single blog author.
    pub username: String,
    /// Per-deployment salt mixed into the password hash.
    pub salt: String,
    /// Uppercase hex PBKDF2 digest of the author's password.
    pub password_hash: SecretString,
    /// Blog title.
    pub name: String,
    /// Blog description.
    pub description: String,
    /// Short title used where space is limited (home screen, tabs).
    pub short_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            posts_per_page: default_posts_per_page(),
            comments_close_after_days: default_comments_close_after_days(),
            username: String::new(),
            salt: String::new(),
            password_hash: SecretString::new(String::new().into()),
            name: String::new(),
            description: String::new(),
            short_name: String::new(),
        }
    }
}

pub(crate) fn default_posts_per_page() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_POSTS_PER_PAGE).unwrap_or(NonZeroU32::MIN)
}

pub(crate) fn default_comments_close_after_days() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_COMMENTS_CLOSE_AFTER_DAYS).unwrap_or(NonZeroU32::MIN)
}

/// Where a settings snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSource {
    /// The `mb-*` environment variables, accepted as a complete set.
    Environment,
    /// The `blog` section of the settings document (with defaults).
    Configuration,
}

impl SettingsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsSource::Environment => "environment",
            SettingsSource::Configuration => "configuration",
        }
    }
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
