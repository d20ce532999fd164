//! Settings and credentials for Miniblog.
//!
//! This crate resolves the blog settings from `mb-*` environment variables
//! or the JSON settings document, and verifies the administrator login
//! against the configured PBKDF2 password hash.

pub mod constants;
pub mod credentials;
mod loader;
pub mod snapshot;
pub mod types;

pub use credentials::{CredentialVerifier, hash_password};
pub use loader::{
    AppSettings, BlogSection, ConfigError, ConfigLoader, EnvRejection, EnvSnapshot,
    default_config_path, resolve, resolve_from_configuration, resolve_from_environment,
};
pub use snapshot::SettingsSnapshot;
pub use types::{Icon, ManifestError, Settings, SettingsSource, WebManifest};
