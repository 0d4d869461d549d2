//! Onboarding secret issuance (初始密码)
//!
//! New and reset accounts receive an onboarding secret that must be changed
//! on first use. The default [`StaticSecret`] hands out the same value to
//! every account; this is a known weakness kept for compatibility with the
//! existing onboarding flow. [`RandomSecret`] can be swapped in without
//! changing any caller.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Onboarding secret shared by all new and reset accounts
pub const DEFAULT_ONBOARDING_SECRET: &str = "Pass@123";

const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const DIGITS: &[u8] = b"23456789";
const SPECIALS: &[u8] = b"!@#$%^&*_+-=?";

/// Shorter requests are padded up to the policy minimum
const MIN_RANDOM_LENGTH: usize = 8;

/// Produces onboarding secrets
///
/// Every returned value must satisfy the default password policy (checked
/// without a display name).
pub trait SecretGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Always returns the same configured value
#[derive(Debug, Clone)]
pub struct StaticSecret(String);

impl StaticSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl Default for StaticSecret {
    fn default() -> Self {
        Self::new(DEFAULT_ONBOARDING_SECRET)
    }
}

impl SecretGenerator for StaticSecret {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Random secret with one character from each required class
#[derive(Debug, Clone, Copy)]
pub struct RandomSecret {
    pub length: usize,
}

impl Default for RandomSecret {
    fn default() -> Self {
        Self { length: 12 }
    }
}

impl SecretGenerator for RandomSecret {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let classes = [UPPERCASE, LOWERCASE, DIGITS, SPECIALS];
        let length = self.length.max(MIN_RANDOM_LENGTH);

        let mut bytes: Vec<u8> = classes
            .iter()
            .map(|class| class[rng.gen_range(0..class.len())])
            .collect();
        while bytes.len() < length {
            let class = classes[rng.gen_range(0..classes.len())];
            bytes.push(class[rng.gen_range(0..class.len())]);
        }
        bytes.shuffle(&mut rng);

        bytes.into_iter().map(char::from).collect()
    }
}

/// Issue a secret with the default generator
pub fn generate_onboarding_secret() -> String {
    StaticSecret::default().generate()
}

/// Plaintext secret handed to an administrator once
///
/// `Debug` and `Display` are redacted so the value cannot leak through
/// logs; read it with [`IssuedSecret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedSecret(String);

impl IssuedSecret {
    pub(crate) fn new(secret: String) -> Self {
        Self(secret)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IssuedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IssuedSecret(***)")
    }
}

impl fmt::Display for IssuedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
