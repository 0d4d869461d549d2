//! Account Model (员工账号)

use super::Role;
use serde::{Deserialize, Serialize};

/// Credential state of one account
///
/// `password_expires_at == password_changed_at + validity window` holds after
/// every password change (provisioning, user change, admin reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Derived hash, never the plaintext
    pub password_hash: String,
    /// True until the holder completes the mandatory password change
    pub first_login: bool,
    /// Unix millis
    pub password_changed_at: i64,
    /// Unix millis
    pub password_expires_at: i64,
}

/// Staff account as held by the account directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    /// Login identifier
    pub email: String,
    /// Full name, also used by the password name-exclusion rule
    #[serde(rename = "name")]
    pub display_name: String,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub credential: CredentialRecord,
}

fn default_true() -> bool {
    true
}

/// Create account payload (admin provisioning)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub role: Role,
}

impl Account {
    /// Directory key: emails are matched case-insensitively
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}
