//! Credential verification against the configured password hash.
//!
//! Responsibilities:
//! - Derive the password hash (PBKDF2 with HMAC-SHA-1, 1000 rounds, 32 bytes, uppercase hex).
//! - Validate a submitted username/password pair against resolved settings.
//!
//! Does NOT handle:
//! - Sessions, cookies, lockout or throttling.
//! - Choosing where settings come from (see `loader`).
//!
//! Invariants:
//! - Validation never panics and never errors; any mismatch or malformed configuration yields `false`.
//! - Usernames compare byte-for-byte (case-sensitive).
//! - The digest comparison is constant-time over the hex text. A plain string comparison
//!   would leak how many leading characters matched.
//! - Nothing is retained between calls; a verifier is safe to share across threads.

use pbkdf2::pbkdf2_hmac;
use secrecy::ExposeSecret;
use sha1::Sha1;
use subtle::ConstantTimeEq;

use crate::constants::{DERIVED_KEY_LEN, PBKDF2_ITERATIONS};
use crate::snapshot::SettingsSnapshot;
use crate::types::Settings;

/// Derive the stored form of `password` for the given salt.
///
/// The salt is used as its UTF-8 bytes. The result is 64 uppercase hex
/// characters, the format expected in `mb-pwdhash` and `blog.Password`.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut derived = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut derived,
    );
    hex::encode_upper(derived)
}

/// Check a username/password pair against the configured credential.
pub fn validate(username: &str, password: &str, settings: &Settings) -> bool {
    if username != settings.username {
        return false;
    }

    let derived = hash_password(password, &settings.salt);
    hashes_match(&derived, settings.password_hash.expose_secret())
}

fn hashes_match(derived: &str, configured: &str) -> bool {
    derived.as_bytes().ct_eq(configured.as_bytes()).into()
}

/// Validates logins against an injected settings snapshot.
///
/// The KDF blocks the calling thread; async callers should run
/// `validate` on a blocking worker.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    settings: SettingsSnapshot,
}

impl CredentialVerifier {
    pub fn new(settings: SettingsSnapshot) -> Self {
        Self { settings }
    }

    /// Returns true iff both the username and the password match.
    pub fn validate(&self, username: &str, password: &str) -> bool {
        let valid = validate(username, password, self.settings.value());
        if !valid {
            tracing::debug!("credential check failed");
        }
        valid
    }
}
