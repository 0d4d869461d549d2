//! Demo staff accounts (演示账号)
//!
//! One active account per role, passwords already changed so they log in
//! directly.

use medi_auth::expiry::expiry_after;
use medi_auth::{InMemoryDirectory, PolicyConfig, hash};
use shared::models::{Account, CredentialRecord, Role};

/// (email, display name, role, password)
pub const DEMO_ACCOUNTS: &[(&str, &str, Role, &str)] = &[
    ("admin@hospital.com", "Admin User", Role::Admin, "Admin@123"),
    ("doctor@hospital.com", "Dr. John Smith", Role::Doctor, "Doctor@123"),
    ("nurse@hospital.com", "Sarah Johnson", Role::Nurse, "Nurse@123"),
    ("receptionist@hospital.com", "Emma Davis", Role::Receptionist, "Receptionist@123"),
    ("attendant@hospital.com", "James Brown", Role::Attendant, "Attendant@123"),
    ("finance@hospital.com", "Mike Wilson", Role::Finance, "Finance@123"),
    ("lab@hospital.com", "Dr. Lisa Chen", Role::Lab, "Lab@123"),
    ("cleaner@hospital.com", "Maria Garcia", Role::Cleaner, "Cleaner@123"),
];

/// Directory holding every demo account, passwords set at `now`
pub fn demo_directory(policy: &PolicyConfig, now: i64) -> InMemoryDirectory {
    DEMO_ACCOUNTS
        .iter()
        .zip(1..)
        .map(|(&(email, name, role, password), id)| Account {
            id,
            email: email.to_string(),
            display_name: name.to_string(),
            role,
            is_active: true,
            credential: CredentialRecord {
                password_hash: hash(password),
                first_login: false,
                password_changed_at: now,
                password_expires_at: expiry_after(now, policy.validity_days),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use medi_auth::{AccountDirectory, verify};

    #[test]
    fn test_one_account_per_role() {
        for role in Role::ALL {
            assert_eq!(
                DEMO_ACCOUNTS.iter().filter(|(_, _, r, _)| *r == role).count(),
                1,
                "{role}"
            );
        }
    }

    #[test]
    fn test_demo_directory() {
        let directory = demo_directory(&PolicyConfig::default(), 1_000);
        assert_eq!(directory.len(), DEMO_ACCOUNTS.len());

        let nurse = directory.find_by_email("nurse@hospital.com").unwrap().unwrap();
        assert_eq!(nurse.display_name, "Sarah Johnson");
        assert!(!nurse.credential.first_login);
        assert!(verify("Nurse@123", &nurse.credential.password_hash));
    }
}
