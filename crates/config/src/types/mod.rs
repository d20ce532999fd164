//! Configuration types for Miniblog.
//!
//! Responsibilities:
//! - Define the resolved settings record and its source marker.
//! - Define the web manifest derived from settings.
//!
//! Does NOT handle:
//! - Loading settings from the environment or files (see `loader`).

mod manifest;
mod settings;

pub use manifest::{Icon, ManifestError, WebManifest};
pub use settings::{Settings, SettingsSource};

pub(crate) use settings::{default_comments_close_after_days, default_posts_per_page};
