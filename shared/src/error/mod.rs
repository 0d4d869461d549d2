//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 5xxx: Payroll errors
//! - 7xxx: Attendance errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InvalidCredentials);
//! assert_eq!(err.code.code(), 1002);
//!
//! let err = AppError::new(ErrorCode::PasswordPolicyViolation)
//!     .with_detail("violations", vec!["Password must be at least 8 characters long"]);
//! assert!(err.detail("violations").is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
