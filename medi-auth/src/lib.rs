//! Staff credential policy
//!
//! Password lifecycle for hospital staff accounts:
//! - [`policy`]: strength rules and personal-name exclusion
//! - [`hasher`]: one-way secret hashing and verification
//! - [`secret`]: onboarding secret issuance
//! - [`expiry`]: 30-day validity window and expiry checks
//! - [`service`]: provisioning, login, password change and admin reset over
//!   an injected [`AccountDirectory`]
//!
//! Everything except [`CredentialService`] is a pure function of its inputs;
//! timestamps are passed in as Unix millis.

pub mod config;
pub mod directory;
pub mod error;
pub mod expiry;
pub mod hasher;
pub mod policy;
pub mod secret;
pub mod service;

pub use config::PolicyConfig;
pub use directory::{AccountDirectory, InMemoryDirectory};
pub use error::{AuthError, AuthResult};
pub use expiry::{compute_expiry, days_until_expiry, expiry_warning, is_expired};
pub use hasher::{Argon2Hasher, SecretHasher, Sha256Hasher, hash, verify};
pub use policy::{PasswordPolicy, PasswordValidation, PasswordViolation, validate};
pub use secret::{
    IssuedSecret, RandomSecret, SecretGenerator, StaticSecret, generate_onboarding_secret,
};
pub use service::{ChangeReason, CredentialService, LoginOutcome, PasswordChange};
