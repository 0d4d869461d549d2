//! Clock records (考勤打卡)
//!
//! A record is opened at clock-in and closed exactly once at clock-out;
//! worked and overtime hours are fixed at that moment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::ClockRecord;
use shared::util::{HOUR_MILLIS, snowflake_id_at};

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::money::{checked_add, require_non_negative, round2, to_f64};

/// Worked and overtime hours, 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursSummary {
    pub worked_hours: f64,
    pub overtime_hours: f64,
}

/// Hours for one clock-in/clock-out pair with the default 8-hour day
pub fn close_clock_record(clock_in: i64, clock_out: i64) -> PayrollResult<HoursSummary> {
    close_clock_record_with(clock_in, clock_out, PayrollConfig::default().standard_daily_hours)
}

/// Hours for one clock-in/clock-out pair
///
/// A clock-out earlier than the clock-in is rejected rather than clamped.
/// Overtime is derived from the rounded worked hours so the stored pair
/// always satisfies `overtime = max(0, worked - standard)`.
pub fn close_clock_record_with(
    clock_in: i64,
    clock_out: i64,
    standard_daily_hours: Decimal,
) -> PayrollResult<HoursSummary> {
    if clock_out < clock_in {
        return Err(PayrollError::ClockOutBeforeClockIn {
            clock_in,
            clock_out,
        });
    }

    // i128 so extreme timestamps cannot overflow the difference
    let elapsed = i128::from(clock_out) - i128::from(clock_in);
    let worked = round2(Decimal::from_i128_with_scale(elapsed, 0) / Decimal::from(HOUR_MILLIS));
    let overtime = (worked - standard_daily_hours).max(Decimal::ZERO);

    Ok(HoursSummary {
        worked_hours: to_f64(worked),
        overtime_hours: to_f64(overtime),
    })
}

/// Open a record at clock-in
pub fn open_clock_record(employee_id: i64, employee_name: impl Into<String>, at: i64) -> ClockRecord {
    let record = ClockRecord {
        id: snowflake_id_at(at),
        employee_id,
        employee_name: employee_name.into(),
        clock_in: at,
        clock_out: None,
        worked_hours: 0.0,
        overtime_hours: 0.0,
    };
    tracing::info!(record_id = record.id, employee_id, "Clocked in");
    record
}

/// Close an open record at `at`
///
/// On error the record is left untouched.
pub fn close_record(
    record: &mut ClockRecord,
    at: i64,
    config: &PayrollConfig,
) -> PayrollResult<HoursSummary> {
    if record.is_closed() {
        return Err(PayrollError::ClockRecordAlreadyClosed(record.id));
    }

    let summary = close_clock_record_with(record.clock_in, at, config.standard_daily_hours)?;
    record.clock_out = Some(at);
    record.worked_hours = summary.worked_hours;
    record.overtime_hours = summary.overtime_hours;

    tracing::info!(
        record_id = record.id,
        employee_id = record.employee_id,
        worked_hours = summary.worked_hours,
        overtime_hours = summary.overtime_hours,
        "Clocked out"
    );
    Ok(summary)
}

/// Sum of closed records; open records count as zero
///
/// Stored hours that are negative, non-finite or overflow the sum are
/// rejected.
pub fn aggregate_hours<'a>(
    records: impl IntoIterator<Item = &'a ClockRecord>,
) -> PayrollResult<HoursSummary> {
    let mut worked = Decimal::ZERO;
    let mut overtime = Decimal::ZERO;

    for record in records.into_iter().filter(|r| r.is_closed()) {
        let w = require_non_negative(record.worked_hours, "workedHours")?;
        let o = require_non_negative(record.overtime_hours, "overtimeHours")?;
        worked = checked_add(worked, w, "workedHours", record.worked_hours)?;
        overtime = checked_add(overtime, o, "overtimeHours", record.overtime_hours)?;
    }

    Ok(HoursSummary {
        worked_hours: to_f64(worked),
        overtime_hours: to_f64(overtime),
    })
}

/// [`aggregate_hours`] over one employee's records
pub fn aggregate_hours_for(employee_id: i64, records: &[ClockRecord]) -> PayrollResult<HoursSummary> {
    aggregate_hours(records.iter().filter(|r| r.employee_id == employee_id))
}
