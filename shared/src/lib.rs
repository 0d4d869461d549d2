//! Shared types for the Medi workspace
//!
//! Record models (accounts, credential records, clock records, payment
//! requests), the unified error system and small time/id utilities used by
//! the policy crates and the admin tool.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
