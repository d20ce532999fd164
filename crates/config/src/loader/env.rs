//! Environment variable source for blog settings.
//!
//! Responsibilities:
//! - Capture the process environment once into an immutable `EnvSnapshot`.
//! - Validate the `mb-*` keys in a fixed order and build `Settings` from them.
//!
//! Does NOT handle:
//! - Falling back to the settings document (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - The snapshot is never re-read from the live environment after capture.
//! - Validation short-circuits on the first failing key, in `ENV_KEYS` order.
//! - The source is all-or-nothing: a rejection never yields partial settings.
//! - String values are kept verbatim; only numeric values are trimmed before parsing.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use secrecy::SecretString;

use super::error::EnvRejection;
use crate::constants::{
    ENV_COMMENTS_CLOSE_AFTER_DAYS, ENV_DESCRIPTION, ENV_NAME, ENV_OWNER, ENV_PASSWORD_HASH,
    ENV_PASSWORD_SALT, ENV_POSTS_PER_PAGE, ENV_SHORT_NAME, ENV_USERNAME,
};
use crate::types::Settings;

/// Immutable capture of environment variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

// Values may hold secrets; only keys are printed.
impl std::fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSnapshot")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Look up a variable by exact (case-sensitive) name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build settings from the `mb-*` environment variables.
///
/// Returns the first rejection encountered; the caller decides whether to fall back.
pub fn resolve_from_environment(vars: &EnvSnapshot) -> Result<Settings, EnvRejection> {
    if vars.is_empty() {
        return Err(EnvRejection::Empty);
    }

    let posts_per_page = positive_count(vars, ENV_POSTS_PER_PAGE)?;
    let comments_close_after_days = positive_count(vars, ENV_COMMENTS_CLOSE_AFTER_DAYS)?;
    let owner = required(vars, ENV_OWNER)?;
    let username = required(vars, ENV_USERNAME)?;
    let salt = required(vars, ENV_PASSWORD_SALT)?;
    let password_hash = required(vars, ENV_PASSWORD_HASH)?;
    let name = required(vars, ENV_NAME)?;
    let short_name = required(vars, ENV_SHORT_NAME)?;
    let description = required(vars, ENV_DESCRIPTION)?;

    Ok(Settings {
        owner,
        posts_per_page,
        comments_close_after_days,
        username,
        salt,
        password_hash: SecretString::new(password_hash.into()),
        name,
        description,
        short_name,
    })
}

/// Read a key that must be present and non-empty.
fn required(vars: &EnvSnapshot, key: &'static str) -> Result<String, EnvRejection> {
    match vars.get(key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(EnvRejection::Missing { key }),
    }
}

/// Read a key that must parse as a strictly positive 32-bit signed integer.
fn positive_count(vars: &EnvSnapshot, key: &'static str) -> Result<NonZeroU32, EnvRejection> {
    let raw = vars.get(key).ok_or(EnvRejection::Missing { key })?;
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| EnvRejection::InvalidNumber { key })?;
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(EnvRejection::NotPositive { key })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ENV_KEYS;
    use secrecy::ExposeSecret;

    const HASH: &str = "4144A53C72252C4D5F58A7C7063FAD2B70F5FDCBD9856404392D5F766874340B";

    fn complete_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("mb-postsperpage", "5"),
            ("mb-commentsclosefterdays", "7"),
            ("mb-owner", "Jane"),
            ("mb-username", "admin"),
            ("mb-pwdsalt", "s1"),
            ("mb-pwdhash", HASH),
            ("mb-name", "Blog"),
            ("mb-shortname", "B"),
            ("mb-description", "d"),
        ]
    }

    fn snapshot_without(key: &str) -> EnvSnapshot {
        complete_vars()
            .into_iter()
            .filter(|(k, _)| *k != key)
            .collect()
    }

    fn snapshot_with(key: &str, value: &'static str) -> EnvSnapshot {
        complete_vars()
            .into_iter()
            .map(|(k, v)| if k == key { (k, value) } else { (k, v) })
            .collect()
    }

    #[test]
    fn test_complete_environment_resolves_verbatim() {
        let vars: EnvSnapshot = complete_vars().into_iter().collect();
        let settings = resolve_from_environment(&vars).unwrap();

        assert_eq!(settings.posts_per_page.get(), 5);
        assert_eq!(settings.comments_close_after_days.get(), 7);
        assert_eq!(settings.owner, "Jane");
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.salt, "s1");
        assert_eq!(settings.password_hash.expose_secret(), HASH);
        assert_eq!(settings.name, "Blog");
        assert_eq!(settings.short_name, "B");
        assert_eq!(settings.description, "d");
    }

    #[test]
    fn test_empty_snapshot_is_rejected() {
        assert_eq!(
            resolve_from_environment(&EnvSnapshot::default()).unwrap_err(),
            EnvRejection::Empty
        );
    }

    #[test]
    fn test_each_missing_key_rejects_the_source() {
        for key in ENV_KEYS {
            let result = resolve_from_environment(&snapshot_without(key));
            assert_eq!(result.unwrap_err().key(), Some(key), "key {key}");
        }
    }

    #[test]
    fn test_each_empty_string_key_rejects_the_source() {
        for key in ENV_KEYS.into_iter().skip(2) {
            let result = resolve_from_environment(&snapshot_with(key, ""));
            assert_eq!(
                result.unwrap_err(),
                EnvRejection::Missing { key },
                "key {key}"
            );
        }
    }

    #[test]
    fn test_non_numeric_posts_per_page_is_rejected() {
        let result = resolve_from_environment(&snapshot_with("mb-postsperpage", "abc"));
        assert_eq!(
            result.unwrap_err(),
            EnvRejection::InvalidNumber {
                key: "mb-postsperpage"
            }
        );
    }

    #[test]
    fn test_zero_and_negative_counts_are_rejected() {
        let result = resolve_from_environment(&snapshot_with("mb-commentsclosefterdays", "0"));
        assert_eq!(
            result.unwrap_err(),
            EnvRejection::NotPositive {
                key: "mb-commentsclosefterdays"
            }
        );

        let result = resolve_from_environment(&snapshot_with("mb-postsperpage", "-3"));
        assert_eq!(
            result.unwrap_err(),
            EnvRejection::NotPositive {
                key: "mb-postsperpage"
            }
        );
    }

    #[test]
    fn test_count_beyond_i32_is_rejected() {
        let result = resolve_from_environment(&snapshot_with("mb-postsperpage", "2147483648"));
        assert!(matches!(result, Err(EnvRejection::InvalidNumber { .. })));
    }

    #[test]
    fn test_counts_tolerate_surrounding_whitespace() {
        let settings =
            resolve_from_environment(&snapshot_with("mb-postsperpage", " 12 ")).unwrap();
        assert_eq!(settings.posts_per_page.get(), 12);
    }

    #[test]
    fn test_first_failure_wins() {
        // Both counts are bad; the first key in order is reported.
        let vars: EnvSnapshot = complete_vars()
            .into_iter()
            .map(|(k, v)| match k {
                "mb-postsperpage" => (k, "x"),
                "mb-commentsclosefterdays" => (k, "y"),
                "mb-description" => (k, ""),
                _ => (k, v),
            })
            .collect();
        assert_eq!(
            resolve_from_environment(&vars).unwrap_err().key(),
            Some("mb-postsperpage")
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let vars: EnvSnapshot = complete_vars()
            .into_iter()
            .map(|(k, v)| {
                if k == "mb-owner" {
                    ("MB-OWNER", v)
                } else {
                    (k, v)
                }
            })
            .collect();
        assert_eq!(
            resolve_from_environment(&vars).unwrap_err(),
            EnvRejection::Missing { key: "mb-owner" }
        );
    }

    #[test]
    fn test_whitespace_string_values_are_kept_verbatim() {
        let settings = resolve_from_environment(&snapshot_with("mb-owner", "  Jane  ")).unwrap();
        assert_eq!(settings.owner, "  Jane  ");
    }

    #[test]
    fn test_debug_prints_keys_only() {
        let vars: EnvSnapshot = complete_vars().into_iter().collect();
        let debug = format!("{:?}", vars);
        assert!(debug.contains("mb-pwdhash"));
        assert!(!debug.contains(HASH));
    }

    #[test]
    fn test_unrelated_variables_do_not_count() {
        let vars: EnvSnapshot = [("PATH", "/usr/bin"), ("HOME", "/root")].into_iter().collect();
        assert_eq!(
            resolve_from_environment(&vars).unwrap_err(),
            EnvRejection::Missing {
                key: "mb-postsperpage"
            }
        );
    }
}
