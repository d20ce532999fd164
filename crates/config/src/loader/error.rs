//! Error types for settings resolution.
//!
//! Responsibilities:
//! - Describe why the environment source was rejected (`EnvRejection`).
//! - Describe loader failures for the settings document and `.env` file (`ConfigError`).
//!
//! Does NOT handle:
//! - Credential failures (validation returns `bool`, never an error).
//!
//! Invariants:
//! - `EnvRejection` names the offending key but never carries its value.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Why the environment source was not accepted.
///
/// A rejection is not a failure of resolution: it only selects the
/// settings document as the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvRejection {
    #[error("environment snapshot is empty")]
    Empty,

    #[error("missing or empty environment variable: {key}")]
    Missing { key: &'static str },

    #[error("environment variable {key} is not an integer")]
    InvalidNumber { key: &'static str },

    #[error("environment variable {key} must be greater than zero")]
    NotPositive { key: &'static str },
}

impl EnvRejection {
    /// The key that caused the rejection, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            EnvRejection::Empty => None,
            EnvRejection::Missing { key }
            | EnvRejection::InvalidNumber { key }
            | EnvRejection::NotPositive { key } => Some(key),
        }
    }
}

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read settings file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse settings document: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
