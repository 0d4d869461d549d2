//! Unified error codes
//!
//! Error codes are organized by category:
//! - 1xxx: Authentication / credential errors
//! - 2xxx: Permission errors
//! - 5xxx: Payroll and payment request errors
//! - 7xxx: Attendance (clock record) errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the local store and the
/// front end can carry them as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Account is disabled
    AccountDisabled = 1007,
    /// New password violates the password policy
    PasswordPolicyViolation = 1010,
    /// New password and confirmation differ
    PasswordMismatch = 1011,

    // ==================== 2xxx: Permission ====================
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 5xxx: Payroll ====================
    /// Amount is negative, not finite or out of range
    InvalidAmount = 5001,
    /// Payment request status change is not allowed
    InvalidStatusTransition = 5102,

    // ==================== 7xxx: Attendance ====================
    /// Clock-out time is earlier than clock-in time
    ClockOutBeforeClockIn = 7002,
    /// Clock record has already been closed
    ClockRecordAlreadyClosed = 7003,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee email already registered
    EmployeeEmailExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage error
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Auth
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::AccountDisabled => "Account has been disabled",
            ErrorCode::PasswordPolicyViolation => "Password does not meet the policy",
            ErrorCode::PasswordMismatch => "Passwords do not match",

            // Permission
            ErrorCode::AdminRequired => "Admin role required",

            // Payroll
            ErrorCode::InvalidAmount => "Invalid amount",
            ErrorCode::InvalidStatusTransition => "Invalid payment request status change",

            // Attendance
            ErrorCode::ClockOutBeforeClockIn => "Clock-out is earlier than clock-in",
            ErrorCode::ClockRecordAlreadyClosed => "Clock record already closed",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeEmailExists => "Email already registered",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),
            1007 => Ok(ErrorCode::AccountDisabled),
            1010 => Ok(ErrorCode::PasswordPolicyViolation),
            1011 => Ok(ErrorCode::PasswordMismatch),

            // Permission
            2003 => Ok(ErrorCode::AdminRequired),

            // Payroll
            5001 => Ok(ErrorCode::InvalidAmount),
            5102 => Ok(ErrorCode::InvalidStatusTransition),

            // Attendance
            7002 => Ok(ErrorCode::ClockOutBeforeClockIn),
            7003 => Ok(ErrorCode::ClockRecordAlreadyClosed),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::PasswordPolicyViolation.code(), 1010);
        assert_eq!(ErrorCode::PasswordMismatch.code(), 1011);
        assert_eq!(ErrorCode::AdminRequired.code(), 2003);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 5102);
        assert_eq!(ErrorCode::ClockOutBeforeClockIn.code(), 7002);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_matches_code() {
        let codes = [
            ErrorCode::InvalidCredentials,
            ErrorCode::AccountDisabled,
            ErrorCode::PasswordPolicyViolation,
            ErrorCode::PasswordMismatch,
            ErrorCode::AdminRequired,
            ErrorCode::InvalidAmount,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::ClockOutBeforeClockIn,
            ErrorCode::ClockRecordAlreadyClosed,
            ErrorCode::EmployeeNotFound,
            ErrorCode::EmployeeEmailExists,
            ErrorCode::InternalError,
            ErrorCode::StorageError,
            ErrorCode::ConfigError,
        ];

        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_deserialize_invalid() {
        for raw in ["0", "999", "1001", "10000"] {
            let result: Result<ErrorCode, _> = serde_json::from_str(raw);
            assert!(result.is_err(), "{raw} should not parse");
        }
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidCredentials).unwrap();
        assert_eq!(json, "1002");

        let parsed: ErrorCode = serde_json::from_str("7002").unwrap();
        assert_eq!(parsed, ErrorCode::ClockOutBeforeClockIn);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::AdminRequired), "2003");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::InvalidCredentials.message(),
            "Invalid email or password"
        );
        assert_eq!(ErrorCode::PasswordMismatch.message(), "Passwords do not match");
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
