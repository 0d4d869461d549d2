//! Data models
//!
//! Records owned by the storage layer and consumed/produced by the policy
//! crates. JSON field names follow the local store (camelCase).
//! All IDs are `i64` snowflakes, all timestamps Unix millis.

pub mod account;
pub mod clock_record;
pub mod payment_request;
pub mod role;

// Re-exports
pub use account::*;
pub use clock_record::*;
pub use payment_request::*;
pub use role::*;
