//! Payment requests (付款申请)
//!
//! ```text
//! Pending --approve--> Approved --pay--> Paid
//! Pending --reject---> Rejected
//! ```

use shared::models::{
    ClockRecord, PayCalculation, PaymentRequest, PaymentRequestCreate, PaymentStatus,
};
use shared::util::snowflake_id_at;

use crate::clock::aggregate_hours_for;
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::money::{checked_add, require_non_negative, to_f64};
use crate::overtime::overtime_pay;

/// Build a pending request from the employee's closed clock records
///
/// Overtime pay is always recorded; it is added to the payable amount only
/// for [`PayCalculation::WithOvertime`].
pub fn build_payment_request(
    input: PaymentRequestCreate,
    records: &[ClockRecord],
    config: &PayrollConfig,
    now: i64,
) -> PayrollResult<PaymentRequest> {
    let base = require_non_negative(input.amount, "amount")?;
    let hours = aggregate_hours_for(input.employee_id, records)?;
    let overtime = overtime_pay(input.monthly_salary, hours.overtime_hours, config)?;

    let amount = match input.calculation {
        PayCalculation::Basic => base,
        PayCalculation::WithOvertime => checked_add(base, overtime, "amount", input.amount)?,
    };

    let request = PaymentRequest {
        id: snowflake_id_at(now),
        employee_id: input.employee_id,
        employee_name: input.employee_name,
        amount: to_f64(amount),
        reason: input.reason,
        status: PaymentStatus::Pending,
        requested_at: now,
        bank_details: input.bank_details,
        worked_hours: hours.worked_hours,
        overtime_hours: hours.overtime_hours,
        overtime_pay: to_f64(overtime),
        calculation: input.calculation,
    };

    tracing::info!(
        request_id = request.id,
        employee_id = request.employee_id,
        amount = request.amount,
        overtime_pay = request.overtime_pay,
        calculation = ?request.calculation,
        "Payment request created"
    );
    Ok(request)
}

/// Whether `from → to` is an allowed status change
pub fn can_transition(from: PaymentStatus, to: PaymentStatus) -> bool {
    use PaymentStatus::*;
    matches!(
        (from, to),
        (Pending, Approved) | (Pending, Rejected) | (Approved, Paid)
    )
}

/// Move a request to `to`; the request is unchanged on error
pub fn transition(request: &mut PaymentRequest, to: PaymentStatus) -> PayrollResult<()> {
    let from = request.status;
    if !can_transition(from, to) {
        tracing::warn!(request_id = request.id, ?from, ?to, "Rejected status change");
        return Err(PayrollError::InvalidStatusTransition { from, to });
    }
    request.status = to;
    tracing::info!(request_id = request.id, ?from, ?to, "Payment request status changed");
    Ok(())
}
