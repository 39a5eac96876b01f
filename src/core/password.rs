//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) that embed their own random
//! salt and parameters, so two hashes of the same password never compare equal.

use crate::errors::{Error, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash {
            message: e.to_string(),
        })
}

/// Checks a plaintext password against a stored PHC hash.
///
/// Returns `false` for a wrong password and for a malformed hash.
#[must_use]
pub fn verify_password(hashed_password: &str, password: &str) -> bool {
    PasswordHash::new(hashed_password).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("correct-horse-battery"));

        assert!(verify_password(&hash, "correct-horse-battery"));
        assert!(!verify_password(&hash, "wrong-password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("correct-horse-battery").unwrap();
        let second = hash_password("correct-horse-battery").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("not-a-phc-string", "anything"));
    }
}
