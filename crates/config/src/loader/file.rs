//! Settings document source for blog settings.
//!
//! Responsibilities:
//! - Parse the JSON settings document (`appsettings.json` shape) and its `blog` section.
//! - Match the section and member names without regard to ASCII case.
//! - Read scalar members as text and coerce counts from numbers or numeric strings.
//! - Map the `blog` section onto `Settings`, filling documented defaults.
//!
//! Does NOT handle:
//! - Choosing between the environment and this source (see builder.rs).
//! - Writing settings back to disk.
//!
//! Invariants:
//! - A missing file or a missing `blog` section yields all-default settings.
//! - `resolve_from_configuration` never fails; parse and type errors surface from the loaders.
//! - Non-numeric counts are parse errors; zero or negative counts take the default.

use std::fs;
use std::io::ErrorKind;
use std::num::NonZeroU32;
use std::path::Path;

use secrecy::SecretString;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::error::ConfigError;
use crate::constants::{BLOG_SECTION, DEFAULT_OWNER};
use crate::types::{Settings, default_comments_close_after_days, default_posts_per_page};

/// Parsed settings document.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    /// The `blog` section, if the document has one.
    pub blog: Option<BlogSection>,
}

/// The `blog` section as written in the settings document.
///
/// Every member is optional; absent members take the `Settings` defaults.
/// Member names match without regard to ASCII case (`PostsPerPage`,
/// `postsPerPage` and `postsperpage` are the same key).
#[derive(Clone, Default)]
pub struct BlogSection {
    pub owner: Option<String>,
    pub posts_per_page: Option<NonZeroU32>,
    pub comments_close_after_days: Option<NonZeroU32>,
    pub username: Option<String>,
    pub salt: Option<String>,
    /// Hex digest of the password (named `Password` in the document).
    pub password: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_name: Option<String>,
}

impl std::fmt::Debug for BlogSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogSection")
            .field("owner", &self.owner)
            .field("posts_per_page", &self.posts_per_page)
            .field("comments_close_after_days", &self.comments_close_after_days)
            .field("username", &self.username)
            .field("salt", &self.salt)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("name", &self.name)
            .field("description", &self.description)
            .field("short_name", &self.short_name)
            .finish()
    }
}

impl<'de> Deserialize<'de> for AppSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Value::Object(root) = Value::deserialize(deserializer)? else {
            return Err(D::Error::custom("settings document must be a JSON object"));
        };

        let blog = match member(&root, BLOG_SECTION) {
            Some(Value::Object(section)) => {
                Some(BlogSection::from_members(section).map_err(D::Error::custom)?)
            }
            _ => None,
        };
        Ok(Self { blog })
    }
}

impl BlogSection {
    fn from_members(section: &Map<String, Value>) -> Result<Self, String> {
        let text = |name: &str| member(section, name).and_then(scalar_text);
        Ok(Self {
            owner: text("Owner"),
            posts_per_page: count(section, "PostsPerPage")?,
            comments_close_after_days: count(section, "CommentsCloseAfterDays")?,
            username: text("Username"),
            salt: text("Salt"),
            password: text("Password"),
            name: text("Name"),
            description: text("Description"),
            short_name: text("ShortName"),
        })
    }
}

impl AppSettings {
    /// Parse a settings document from JSON text.
    ///
    /// Blank text is treated as an empty document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read a settings document from disk.
    ///
    /// A file that does not exist is an empty document.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "settings file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::ConfigFileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<BlogSection> for Settings {
    fn from(section: BlogSection) -> Self {
        Self {
            owner: section.owner.unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            posts_per_page: section.posts_per_page.unwrap_or_else(default_posts_per_page),
            comments_close_after_days: section
                .comments_close_after_days
                .unwrap_or_else(default_comments_close_after_days),
            username: section.username.unwrap_or_default(),
            salt: section.salt.unwrap_or_default(),
            password_hash: SecretString::new(section.password.unwrap_or_default().into()),
            name: section.name.unwrap_or_default(),
            description: section.description.unwrap_or_default(),
            short_name: section.short_name.unwrap_or_default(),
        }
    }
}

/// Build settings from the `blog` section of a parsed settings document.
///
/// Never fails: a missing section or member takes its default, and counts
/// that were not positive were already dropped while parsing.
pub fn resolve_from_configuration(config: &AppSettings) -> Settings {
    config
        .blog
        .clone()
        .map(Settings::from)
        .unwrap_or_default()
}

/// Look up a member by name, ignoring ASCII case. The last match in map order wins.
fn member<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object
        .iter()
        .rev()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Scalars read as their text; `null`, objects and arrays read as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a count given as a JSON number or a numeric string.
///
/// Text that is not a 32-bit integer is an error. Zero and negative counts
/// fall back to the default with a warning.
fn count(section: &Map<String, Value>, name: &str) -> Result<Option<NonZeroU32>, String> {
    let Some(text) = member(section, name).and_then(scalar_text) else {
        return Ok(None);
    };

    let value: i32 = text
        .trim()
        .parse()
        .map_err(|_| format!("blog.{}: expected an integer, got {:?}", name, text))?;

    match u32::try_from(value).ok().and_then(NonZeroU32::new) {
        Some(value) => Ok(Some(value)),
        None => {
            tracing::warn!(member = name, value, "count must be positive, using default");
            Ok(None)
        }
    }
}
