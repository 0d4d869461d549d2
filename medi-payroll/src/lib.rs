//! Payroll overtime calculator
//!
//! Turns clock-in/clock-out pairs into worked and overtime hours, and a
//! monthly salary plus overtime hours into overtime pay. Payment requests
//! combine both with a requested base amount.
//!
//! Hours and money are computed with `rust_decimal` and stored as `f64`
//! rounded to 2 decimal places.

pub mod clock;
pub mod config;
pub mod error;
pub mod money;
pub mod overtime;
pub mod payment;

pub use clock::{
    HoursSummary, aggregate_hours, aggregate_hours_for, close_clock_record,
    close_clock_record_with, close_record, open_clock_record,
};
pub use config::PayrollConfig;
pub use error::{PayrollError, PayrollResult};
pub use overtime::{compute_overtime_pay, compute_overtime_pay_with, hourly_rate};
pub use payment::{build_payment_request, can_transition, transition};
