//! Secret hashing
//!
//! [`Sha256Hasher`] is the default: deterministic, so equal secrets always
//! produce equal hashes and verification is a plain comparison.
//! [`Argon2Hasher`] stores salted PHC strings; its output differs on every
//! call, so callers must go through [`SecretHasher::verify`].

use crate::error::AuthResult;
use sha2::{Digest, Sha256};

/// One-way transform used to store and check secrets
pub trait SecretHasher: Send + Sync {
    /// Derive the stored form of `secret`
    fn hash(&self, secret: &str) -> AuthResult<String>;

    /// Check `secret` against a value produced by [`SecretHasher::hash`]
    fn verify(&self, secret: &str, stored_hash: &str) -> AuthResult<bool>;
}

/// SHA-256, lowercase hex
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn digest(secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl SecretHasher for Sha256Hasher {
    fn hash(&self, secret: &str) -> AuthResult<String> {
        Ok(Self::digest(secret))
    }

    fn verify(&self, secret: &str, stored_hash: &str) -> AuthResult<bool> {
        Ok(Self::digest(secret) == stored_hash)
    }
}

/// Argon2id with a random salt per hash
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl SecretHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> AuthResult<String> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    fn verify(&self, secret: &str, stored_hash: &str) -> AuthResult<bool> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(stored_hash)?;
        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Hash with the default (deterministic) hasher
pub fn hash(secret: &str) -> String {
    Sha256Hasher::digest(secret)
}

/// `hash(secret) == stored_hash`
pub fn verify(secret: &str, stored_hash: &str) -> bool {
    hash(secret) == stored_hash
}
