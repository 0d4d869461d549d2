//! Clock Record Model (考勤打卡)

use serde::{Deserialize, Serialize};

/// Clock record - one clock-in/clock-out pair of an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    /// Unix millis
    #[serde(rename = "clockInTime")]
    pub clock_in: i64,
    /// Unix millis, null while the record is still open
    #[serde(rename = "clockOutTime")]
    pub clock_out: Option<i64>,
    /// Computed once at clock-out
    #[serde(default)]
    pub worked_hours: f64,
    /// Computed once at clock-out
    #[serde(default)]
    pub overtime_hours: f64,
}

impl ClockRecord {
    pub fn is_closed(&self) -> bool {
        self.clock_out.is_some()
    }
}
