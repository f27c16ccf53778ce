//! Secure password hashing and verification using Argon2.
//!
//! This module provides password hashing functionality using the Argon2id
//! algorithm. Every hash gets a freshly generated random salt, so hashing
//! the same password twice produces two different digests. The digest
//! string embeds the algorithm, parameters and salt, which is everything
//! verification needs later.
//!
//! # Usage
//!
//! Construct a [`CredentialHasher`] once at startup and hand it to whatever
//! needs to hash or verify credentials:
//!
//! ```rust
//! use jot_auth::password::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//!
//! // Hash a user's password for storage.
//! let digest = hasher.hash("user_password_123").unwrap();
//!
//! // Later, verify a login attempt.
//! assert!(hasher.verify("user_password_123", &digest));
//! assert!(!hasher.verify("wrong_password", &digest));
//! ```

use argon2::{
    Algorithm, Argon2, ParamsBuilder, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Hashes credentials and verifies login attempts.
///
/// The hasher is cheap to clone and safe to share; the cost parameters are
/// fixed at construction time.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Creates a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Creates a hasher with explicit cost parameters.
    ///
    /// `m_cost_kib` is the memory cost in KiB, `t_cost` the number of
    /// iterations and `p_cost` the degree of parallelism.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_auth::password::CredentialHasher;
    ///
    /// // Low-cost parameters, only suitable for tests.
    /// let hasher = CredentialHasher::with_cost(8, 1, 1).unwrap();
    /// let digest = hasher.hash("pw").unwrap();
    /// assert!(hasher.verify("pw", &digest));
    /// ```
    pub fn with_cost(m_cost_kib: u32, t_cost: u32, p_cost: u32) -> Result<Self> {
        let mut builder = ParamsBuilder::new();
        builder.m_cost(m_cost_kib);
        builder.t_cost(t_cost);
        builder.p_cost(p_cost);
        let params = builder.build().map_err(Error::HashParams)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Generates a secure digest for the provided password.
    ///
    /// # Arguments
    ///
    /// * `password` - The plaintext password to hash
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Digest ready for storage
    /// * `Err(Error)` - Password hashing errors
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self
            .argon2
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    /// Verifies a password against a stored digest.
    ///
    /// Returns `false` both for a wrong password and for a digest that does
    /// not parse as a password hash, so a corrupted stored digest behaves
    /// like a failed login instead of an internal error.
    ///
    /// # Arguments
    ///
    /// * `password` - The plaintext password to verify
    /// * `digest` - The stored digest string to verify against
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digests_are_salted() {
        let hasher = CredentialHasher::with_cost(8, 1, 1).expect("hasher");
        let first = hasher.hash("hunter2").expect("hash");
        let second = hasher.hash("hunter2").expect("hash");
        assert_ne!(first, second);
        assert!(hasher.verify("hunter2", &first));
        assert!(hasher.verify("hunter2", &second));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hasher = CredentialHasher::with_cost(8, 1, 1).expect("hasher");
        let digest = hasher.hash("correct horse").expect("hash");
        assert!(!hasher.verify("battery staple", &digest));
    }

    #[test]
    fn malformed_digest_is_rejected_without_error() {
        let hasher = CredentialHasher::new();
        assert!(!hasher.verify("anything", "not-a-digest"));
        assert!(!hasher.verify("anything", ""));
        assert!(!hasher.verify("anything", "$argon2id$v=19$broken"));
    }

    #[test]
    fn digests_from_different_cost_settings_still_verify() {
        // The digest embeds its own parameters, so a hasher built with
        // different costs must still verify it.
        let cheap = CredentialHasher::with_cost(8, 1, 1).expect("hasher");
        let digest = cheap.hash("portable").expect("hash");
        assert!(CredentialHasher::new().verify("portable", &digest));
    }
}
