//! Tests for capturing the live process environment.
//!
//! Responsibilities:
//! - Test that `from_env()` sees `mb-*` variables set in the process.
//! - Test that later environment changes do not affect a captured loader.
//!
//! Invariants:
//! - Every test holds `env_lock()` and runs `#[serial]`.

use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use crate::constants::ENV_KEYS;
use crate::loader::ConfigLoader;
use crate::types::SettingsSource;

const HASH: &str = "4144A53C72252C4D5F58A7C7063FAD2B70F5FDCBD9856404392D5F766874340B";

fn complete_vars() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("mb-postsperpage", Some("3")),
        ("mb-commentsclosefterdays", Some("14")),
        ("mb-owner", Some("Process Owner")),
        ("mb-username", Some("admin")),
        ("mb-pwdsalt", Some("s1")),
        ("mb-pwdhash", Some(HASH)),
        ("mb-name", Some("Process Blog")),
        ("mb-shortname", Some("PB")),
        ("mb-description", Some("From the process")),
    ]
}

#[test]
#[serial]
fn test_from_env_resolves_process_variables() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars(complete_vars(), || {
        let snapshot = ConfigLoader::new()
            .from_env()
            .with_config_path(temp_dir.path().join("appsettings.json"))
            .resolve()
            .unwrap();

        assert_eq!(snapshot.source(), SettingsSource::Environment);
        assert_eq!(snapshot.value().owner, "Process Owner");
        assert_eq!(snapshot.value().posts_per_page.get(), 3);
        assert_eq!(snapshot.value().comments_close_after_days.get(), 14);
    });
}

#[test]
#[serial]
fn test_from_env_with_missing_key_falls_back() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let mut vars = complete_vars();
    vars.retain(|(key, _)| *key != "mb-shortname");
    vars.push(("mb-shortname", None));

    temp_env::with_vars(vars, || {
        let snapshot = ConfigLoader::new()
            .from_env()
            .with_config_path(temp_dir.path().join("appsettings.json"))
            .resolve()
            .unwrap();

        assert_eq!(snapshot.source(), SettingsSource::Configuration);
        assert_eq!(snapshot.value().owner, "The Owner");
    });
}

#[test]
#[serial]
fn test_capture_is_not_reread_after_changes() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let loader = temp_env::with_vars(complete_vars(), || ConfigLoader::new().from_env());

    // All mb-* keys are unset again here; the captured values must still win.
    temp_env::with_vars_unset(ENV_KEYS, || {
        let snapshot = loader
            .with_config_path(temp_dir.path().join("appsettings.json"))
            .resolve()
            .unwrap();
        assert_eq!(snapshot.source(), SettingsSource::Environment);
        assert_eq!(snapshot.value().name, "Process Blog");
    });
}
