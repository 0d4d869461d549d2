use shared::error::{AppError, ErrorCode};
use shared::models::PaymentStatus;
use thiserror::Error;

/// Payroll errors
#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("{field} must be a non-negative amount within range, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("Clock-out ({clock_out}) is earlier than clock-in ({clock_in})")]
    ClockOutBeforeClockIn { clock_in: i64, clock_out: i64 },

    #[error("Clock record already closed: {0}")]
    ClockRecordAlreadyClosed(i64),

    #[error("Cannot move payment request from {from:?} to {to:?}")]
    InvalidStatusTransition { from: PaymentStatus, to: PaymentStatus },
}

pub type PayrollResult<T> = Result<T, PayrollError>;

impl From<PayrollError> for AppError {
    fn from(err: PayrollError) -> Self {
        let message = err.to_string();
        match err {
            PayrollError::InvalidAmount { field, value } => {
                AppError::with_message(ErrorCode::InvalidAmount, message)
                    .with_detail("field", field)
                    .with_detail("value", value)
            }
            PayrollError::ClockOutBeforeClockIn {
                clock_in,
                clock_out,
            } => AppError::with_message(ErrorCode::ClockOutBeforeClockIn, message)
                .with_detail("clockInTime", clock_in)
                .with_detail("clockOutTime", clock_out),
            PayrollError::ClockRecordAlreadyClosed(id) => {
                AppError::with_message(ErrorCode::ClockRecordAlreadyClosed, message)
                    .with_detail("id", id)
            }
            PayrollError::InvalidStatusTransition { .. } => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, message)
            }
        }
    }
}
