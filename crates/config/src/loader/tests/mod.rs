//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test dotenv loading and the `DOTENV_DISABLED` gate.
//! - Test source selection between the environment and the settings document.
//! - Test capture of the live process environment.
//!
//! Does NOT handle:
//! - Per-key environment validation (tested in env.rs).
//! - Settings document parsing details (tested in file.rs).
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod process_env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
