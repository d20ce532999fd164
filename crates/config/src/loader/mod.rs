//! Settings loader for the environment and the settings document.
//!
//! Responsibilities:
//! - Load variables from `.env` files into the process environment on request.
//! - Capture the environment once and validate the `mb-*` keys.
//! - Fall back to the JSON settings document when the environment is incomplete.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Credential checks (see `credentials.rs`).
//! - Writing settings back to disk.
//!
//! Invariants / Assumptions:
//! - A complete environment takes precedence over the settings document.
//! - The two sources are never merged field by field.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;
mod path;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, resolve};
pub use env::{EnvSnapshot, resolve_from_environment};
pub use error::{ConfigError, EnvRejection};
pub use file::{AppSettings, BlogSection, resolve_from_configuration};
pub use path::default_config_path;
