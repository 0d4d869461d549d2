use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Credential errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown account or wrong secret; the two are never distinguished
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account has been disabled")]
    AccountDisabled,

    #[error("Password does not meet the policy: {}", .0.join("; "))]
    PolicyViolation(Vec<String>),

    /// New password is acceptable but the confirmation differs
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The configured generator issued a secret the policy rejects
    #[error("Onboarding secret does not meet the password policy: {}", .0.join("; "))]
    WeakOnboardingSecret(Vec<String>),

    #[error("Admin role required")]
    AdminRequired,

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Email already registered: {0}")]
    EmailExists(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Account directory error: {0}")]
    Directory(#[from] AppError),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::Hash(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::invalid_credentials(),
            AuthError::AccountDisabled => AppError::new(ErrorCode::AccountDisabled),
            AuthError::PolicyViolation(messages) => {
                AppError::new(ErrorCode::PasswordPolicyViolation).with_detail("violations", messages)
            }
            AuthError::PasswordMismatch => AppError::new(ErrorCode::PasswordMismatch),
            AuthError::WeakOnboardingSecret(messages) => {
                tracing::error!(violations = ?messages, "Onboarding secret rejected by password policy");
                AppError::config("Onboarding secret does not meet the password policy")
                    .with_detail("violations", messages)
            }
            AuthError::AdminRequired => AppError::new(ErrorCode::AdminRequired),
            AuthError::EmployeeNotFound(email) => {
                AppError::new(ErrorCode::EmployeeNotFound).with_detail("email", email)
            }
            AuthError::EmailExists(email) => {
                AppError::new(ErrorCode::EmployeeEmailExists).with_detail("email", email)
            }
            AuthError::Hash(msg) => {
                tracing::error!(error = %msg, "Password hashing failed");
                AppError::internal(msg)
            }
            AuthError::Directory(e) => e,
        }
    }
}
