//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map settings and command errors to the appropriate exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A rejected login always exits with `AuthenticationFailed`.
//! - Settings that cannot be loaded or used exit with `ConfigError`.

use miniblog_config::{ConfigError, ManifestError};
use thiserror::Error;

/// Structured exit codes for miniblog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - username or password did not match.
    AuthenticationFailed = 2,

    /// Configuration error - settings could not be loaded, or cannot serve the request.
    ///
    /// Scripts should fix the environment or settings document and not retry.
    ConfigError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures raised by the commands themselves.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("no dynamic manifest: {0}")]
    ManifestUnavailable(#[from] ManifestError),
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::InvalidCredentials => ExitCode::AuthenticationFailed,
            CommandError::ManifestUnavailable(_) => ExitCode::ConfigError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(command_err) = cause.downcast_ref::<CommandError>() {
                return ExitCode::from(command_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
        }

        ExitCode::GeneralError
    }
}
