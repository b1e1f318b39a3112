//! Credential hashing
//!
//! Passwords are never stored. Each account gets a fresh random salt, and
//! the table keeps the lowercase hex SHA-256 digest of
//! `password + salt + pepper`. The salt defeats precomputed lookup tables
//! per account; the pepper is a shared secret that lives in configuration,
//! outside any database dump.

use rand::{Rng, distributions::Alphanumeric, thread_rng};
use sha2::{Digest, Sha256};

/// Length of the per-account salt, in characters
pub const SALT_LEN: usize = 49;

/// Generate a fresh random salt drawn uniformly from `[0-9a-zA-Z]`
pub fn generate_salt() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect()
}

/// Hash a password with its salt and the shared pepper
///
/// Returns the lowercase hex encoding of the digest, which is what the
/// `passwordHash` column stores.
pub fn hash_secret(password: &str, salt: &str, pepper: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(pepper.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute the digest for a login attempt and compare it byte-for-byte
/// against the stored hash
pub fn credentials_match(password: &str, salt: &str, pepper: &str, stored_hash: &str) -> bool {
    hash_secret(password, salt, pepper) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_PEPPER: &str = "unit-test-pepper";

    #[test]
    fn test_salt_length_and_alphabet() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LEN);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_hash_is_deterministic_lowercase_hex() {
        let a = hash_secret("pw1", "salt", TEST_PEPPER);
        let b = hash_secret("pw1", "salt", TEST_PEPPER);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_depends_on_salt_and_pepper() {
        let base = hash_secret("pw1", "salt", TEST_PEPPER);
        assert_ne!(base, hash_secret("pw1", "other-salt", TEST_PEPPER));
        assert_ne!(base, hash_secret("pw1", "salt", "other-pepper"));
    }

    #[test]
    fn test_credentials_round_trip() {
        let salt = generate_salt();
        let stored = hash_secret("pw1", &salt, TEST_PEPPER);
        assert!(credentials_match("pw1", &salt, TEST_PEPPER, &stored));
        assert!(!credentials_match("pw2", &salt, TEST_PEPPER, &stored));
    }
}
