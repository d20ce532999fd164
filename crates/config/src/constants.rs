//! Centralized constants for the Miniblog workspace.
//!
//! Environment keys and settings-file names are part of the deployment
//! contract; changing any of them breaks existing containers and config files.

// =============================================================================
// Environment Source Keys
// =============================================================================

/// Posts shown per page (positive integer).
pub const ENV_POSTS_PER_PAGE: &str = "mb-postsperpage";

/// Days after which comments close (positive integer).
///
/// The missing "a" is deliberate: deployed containers already use this name.
pub const ENV_COMMENTS_CLOSE_AFTER_DAYS: &str = "mb-commentsclosefterdays";

pub const ENV_OWNER: &str = "mb-owner";
pub const ENV_USERNAME: &str = "mb-username";
pub const ENV_PASSWORD_SALT: &str = "mb-pwdsalt";
pub const ENV_PASSWORD_HASH: &str = "mb-pwdhash";
pub const ENV_NAME: &str = "mb-name";
pub const ENV_SHORT_NAME: &str = "mb-shortname";
pub const ENV_DESCRIPTION: &str = "mb-description";

/// Every key the environment source reads, in validation order.
pub const ENV_KEYS: [&str; 9] = [
    ENV_POSTS_PER_PAGE,
    ENV_COMMENTS_CLOSE_AFTER_DAYS,
    ENV_OWNER,
    ENV_USERNAME,
    ENV_PASSWORD_SALT,
    ENV_PASSWORD_HASH,
    ENV_NAME,
    ENV_SHORT_NAME,
    ENV_DESCRIPTION,
];

// =============================================================================
// Structured Configuration
// =============================================================================

/// Section of the settings document that holds blog settings (matched ignoring case).
pub const BLOG_SECTION: &str = "blog";

/// File name of the settings document inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "appsettings.json";

/// Environment variable that overrides the settings document location.
pub const CONFIG_PATH_ENV: &str = "MINIBLOG_CONFIG_PATH";

pub const DEFAULT_OWNER: &str = "The Owner";
pub const DEFAULT_POSTS_PER_PAGE: u32 = 2;
pub const DEFAULT_COMMENTS_CLOSE_AFTER_DAYS: u32 = 10;

// =============================================================================
// Credential Hashing
// =============================================================================

/// PBKDF2 iteration count. Stored hashes were produced with this value.
pub const PBKDF2_ITERATIONS: u32 = 1000;

/// Derived key length in bytes (256 bits).
pub const DERIVED_KEY_LEN: usize = 32;

/// Length of the hex-encoded derived key.
pub const PASSWORD_HASH_HEX_LEN: usize = DERIVED_KEY_LEN * 2;
