//! Password strength rules (密码策略)
//!
//! Every rule is checked independently and all violations are reported
//! together, so the password-change screen can list them at once.

use serde::Serialize;
use std::fmt;

/// Characters accepted by the "special character" rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Name tokens of this many characters or fewer are not checked
const MIN_NAME_TOKEN_LEN: usize = 2;

/// One broken password rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PasswordViolation {
    TooShort { min_length: usize },
    MissingUppercase,
    MissingLowercase,
    MissingSpecialCharacter,
    /// Lowercased name token found inside the password
    ContainsName { token: String },
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min_length } => {
                write!(f, "Password must be at least {min_length} characters long")
            }
            Self::MissingUppercase => f.write_str("Password must contain at least 1 uppercase letter"),
            Self::MissingLowercase => f.write_str("Password must contain at least 1 lowercase letter"),
            Self::MissingSpecialCharacter => {
                f.write_str("Password must contain at least 1 special character")
            }
            Self::ContainsName { token } => {
                write!(f, "Password cannot contain your name ({token})")
            }
        }
    }
}

/// Result of [`PasswordPolicy::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordValidation {
    /// True iff `violations` is empty
    pub valid: bool,
    pub violations: Vec<PasswordViolation>,
}

impl PasswordValidation {
    fn from_violations(violations: Vec<PasswordViolation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    /// Human-readable messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Strength rules applied to a new password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters
    pub min_length: usize,
    /// At least one of these must appear
    pub special_characters: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            special_characters: SPECIAL_CHARACTERS.to_string(),
        }
    }
}

impl PasswordPolicy {
    /// Check `secret` against every rule
    ///
    /// `display_name` is split on whitespace; any token longer than two
    /// characters must not appear in the password (case-insensitive).
    pub fn validate(&self, secret: &str, display_name: &str) -> PasswordValidation {
        let mut violations = Vec::new();

        if secret.chars().count() < self.min_length {
            violations.push(PasswordViolation::TooShort {
                min_length: self.min_length,
            });
        }

        if !secret.chars().any(|c| c.is_ascii_uppercase()) {
            violations.push(PasswordViolation::MissingUppercase);
        }

        if !secret.chars().any(|c| c.is_ascii_lowercase()) {
            violations.push(PasswordViolation::MissingLowercase);
        }

        if !secret.chars().any(|c| self.special_characters.contains(c)) {
            violations.push(PasswordViolation::MissingSpecialCharacter);
        }

        let lowered = secret.to_lowercase();
        for token in name_tokens(display_name) {
            if lowered.contains(&token) {
                violations.push(PasswordViolation::ContainsName { token });
            }
        }

        PasswordValidation::from_violations(violations)
    }
}

/// Validate with the default policy
pub fn validate(secret: &str, display_name: &str) -> PasswordValidation {
    PasswordPolicy::default().validate(secret, display_name)
}

/// Distinct lowercased name tokens longer than [`MIN_NAME_TOKEN_LEN`]
fn name_tokens(display_name: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in display_name.split_whitespace() {
        let token = token.to_lowercase();
        if token.chars().count() > MIN_NAME_TOKEN_LEN && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_reports_length() {
        let result = validate("Ab1!", "Jane Doe");
        assert!(!result.valid);
        assert!(
            result
                .violations
                .contains(&PasswordViolation::TooShort { min_length: 8 })
        );
    }

    #[test]
    fn test_valid_password() {
        let result = validate("Passw0rd!", "Jane Doe");
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_name_tokens_rejected_case_insensitively() {
        let result = validate("JaneDoe@123", "Jane Doe");
        assert!(!result.valid);
        assert_eq!(
            result.violations,
            vec![
                PasswordViolation::ContainsName {
                    token: "jane".to_string()
                },
                PasswordViolation::ContainsName {
                    token: "doe".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_short_name_tokens_ignored() {
        // "Li" and "Wu" are too short to be checked
        let result = validate("LiWu#Secure", "Li Wu");
        assert!(result.valid);
    }

    #[test]
    fn test_all_violations_collected() {
        let result = validate("abc", "Abc Smith");
        assert_eq!(
            result.violations,
            vec![
                PasswordViolation::TooShort { min_length: 8 },
                PasswordViolation::MissingUppercase,
                PasswordViolation::MissingSpecialCharacter,
                PasswordViolation::ContainsName {
                    token: "abc".to_string()
                },
            ]
        );
        assert_eq!(result.messages().len(), 4);
    }

    #[test]
    fn test_missing_lowercase() {
        let result = validate("PASSWORD!", "");
        assert_eq!(result.violations, vec![PasswordViolation::MissingLowercase]);
    }

    #[test]
    fn test_repeated_name_token_reported_once() {
        let result = validate("Anna@Anna1", "Anna anna");
        assert_eq!(
            result.violations,
            vec![PasswordViolation::ContainsName {
                token: "anna".to_string()
            }]
        );
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let first = validate("Passw0rd!", "Jane Doe");
        let second = validate("Passw0rd!", "Jane Doe");
        assert_eq!(first, second);
        assert!(second.valid);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy {
            min_length: 12,
            special_characters: "#".to_string(),
        };
        let result = policy.validate("Passw0rd!", "");
        assert_eq!(
            result.violations,
            vec![
                PasswordViolation::TooShort { min_length: 12 },
                PasswordViolation::MissingSpecialCharacter,
            ]
        );
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            PasswordViolation::TooShort { min_length: 8 }.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            PasswordViolation::ContainsName {
                token: "doe".to_string()
            }
            .to_string(),
            "Password cannot contain your name (doe)"
        );
    }

    #[test]
    fn test_violation_serialize() {
        let json = serde_json::to_value(PasswordViolation::ContainsName {
            token: "doe".to_string(),
        })
        .unwrap();
        assert_eq!(json["rule"], "contains_name");
        assert_eq!(json["token"], "doe");
    }
}
