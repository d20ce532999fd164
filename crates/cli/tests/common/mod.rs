//! Shared test utilities for miniblog integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide the environment and settings document fixtures used across tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - No `mb-*` key or `MINIBLOG_CONFIG_PATH` leaks in from the host.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Every environment key the settings resolver reads.
pub const MB_KEYS: [&str; 9] = [
    "mb-postsperpage",
    "mb-commentsclosefterdays",
    "mb-owner",
    "mb-username",
    "mb-pwdsalt",
    "mb-pwdhash",
    "mb-name",
    "mb-shortname",
    "mb-description",
];

/// PBKDF2-HMAC-SHA1 of "secret" with salt "s1".
pub const SECRET_S1_HASH: &str =
    "4144A53C72252C4D5F58A7C7063FAD2B70F5FDCBD9856404392D5F766874340B";

/// Returns a hermetic `miniblog` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All `mb-*` keys and `MINIBLOG_CONFIG_PATH` are cleared.
pub fn miniblog_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("miniblog");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("MINIBLOG_CONFIG_PATH");
    for key in MB_KEYS {
        cmd.env_remove(key);
    }

    cmd
}

/// Returns a hermetic command pointed at `config_path` for the settings document.
pub fn miniblog_cmd_with_config(config_path: &Path) -> Command {
    let mut cmd = miniblog_cmd();
    cmd.arg("--config").arg(config_path);
    cmd
}

/// Sets a complete, valid `mb-*` environment on the command.
pub fn with_complete_env(cmd: &mut Command) -> &mut Command {
    cmd.env("mb-postsperpage", "5")
        .env("mb-commentsclosefterdays", "7")
        .env("mb-owner", "Jane")
        .env("mb-username", "admin")
        .env("mb-pwdsalt", "s1")
        .env("mb-pwdhash", SECRET_S1_HASH)
        .env("mb-name", "Env Blog")
        .env("mb-shortname", "EB")
        .env("mb-description", "Configured from the environment")
}

/// Settings document with a `blog` section whose login is demo / hunter2.
pub fn settings_document() -> String {
    serde_json::json!({
        "blog": {
            "Owner": "Doc Owner",
            "PostsPerPage": 4,
            "CommentsCloseAfterDays": 30,
            "Username": "demo",
            "Salt": "9f2a",
            "Password": "0B1EB42714D8118DAFF88158AE905F7D5E02436151D5CFBE835D623DE45E3E5C",
            "Name": "Doc Blog",
            "Description": "Configured from appsettings.json",
            "ShortName": "DB"
        }
    })
    .to_string()
}
