//! Payment Request Model

use serde::{Deserialize, Serialize};

/// Payment request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Paid,
}

/// How the payable amount is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCalculation {
    /// Requested amount only
    #[default]
    Basic,
    /// Requested amount plus accumulated overtime pay
    WithOvertime,
}

/// Payment request record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    /// Final payable amount
    pub amount: f64,
    pub reason: String,
    pub status: PaymentStatus,
    /// Unix millis
    #[serde(rename = "requestDate")]
    pub requested_at: i64,
    pub bank_details: String,
    pub worked_hours: f64,
    pub overtime_hours: f64,
    pub overtime_pay: f64,
    #[serde(rename = "payCalculationType")]
    pub calculation: PayCalculation,
}

/// Create payment request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestCreate {
    pub employee_id: i64,
    pub employee_name: String,
    /// Monthly salary of the employee, basis of the hourly rate
    pub monthly_salary: f64,
    /// Requested base amount
    pub amount: f64,
    pub reason: String,
    #[serde(default)]
    pub bank_details: String,
    #[serde(default, rename = "payCalculationType")]
    pub calculation: PayCalculation,
}
