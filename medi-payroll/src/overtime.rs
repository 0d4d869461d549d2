//! Overtime pay (加班费)
//!
//! overtime pay = monthly salary / standard monthly hours × multiplier × overtime hours

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::money::{checked_mul, require_non_negative, to_f64};

/// Hourly rate for a monthly salary; `None` for a zero divisor or overflow
pub fn hourly_rate(monthly_salary: Decimal, monthly_hours: Decimal) -> Option<Decimal> {
    monthly_salary.checked_div(monthly_hours)
}

/// Overtime pay with the default 160h month and 1.5× multiplier
pub fn compute_overtime_pay(monthly_salary: f64, overtime_hours: f64) -> PayrollResult<f64> {
    compute_overtime_pay_with(monthly_salary, overtime_hours, &PayrollConfig::default())
}

/// Overtime pay, rounded to 2 decimal places
///
/// Negative, non-finite or out-of-range inputs are rejected, as is a result
/// that overflows.
pub fn compute_overtime_pay_with(
    monthly_salary: f64,
    overtime_hours: f64,
    config: &PayrollConfig,
) -> PayrollResult<f64> {
    overtime_pay(monthly_salary, overtime_hours, config).map(to_f64)
}

/// Unrounded overtime pay
pub(crate) fn overtime_pay(
    monthly_salary: f64,
    overtime_hours: f64,
    config: &PayrollConfig,
) -> PayrollResult<Decimal> {
    let salary = require_non_negative(monthly_salary, "monthlySalary")?;
    let hours = require_non_negative(overtime_hours, "overtimeHours")?;

    let hourly = hourly_rate(salary, config.standard_monthly_hours).ok_or(
        PayrollError::InvalidAmount {
            field: "monthlySalary",
            value: monthly_salary,
        },
    )?;
    let rate = checked_mul(hourly, config.overtime_multiplier, "monthlySalary", monthly_salary)?;
    checked_mul(rate, hours, "overtimeHours", overtime_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rate() {
        assert_eq!(
            hourly_rate(Decimal::from(160_000), Decimal::from(160)),
            Some(Decimal::from(1000))
        );
        assert_eq!(hourly_rate(Decimal::from(100), Decimal::ZERO), None);
    }

    #[test]
    fn test_five_hours_overtime() {
        assert_eq!(compute_overtime_pay(160_000.0, 5.0).unwrap(), 7500.0);
    }

    #[test]
    fn test_fractional_hours_rounded() {
        // 3000 / 160 × 1.5 = 28.125 per hour
        assert_eq!(compute_overtime_pay(3000.0, 1.0).unwrap(), 28.13);
        assert_eq!(compute_overtime_pay(3000.0, 2.5).unwrap(), 70.31);
    }

    #[test]
    fn test_zero_hours_or_salary() {
        assert_eq!(compute_overtime_pay(160_000.0, 0.0).unwrap(), 0.0);
        assert_eq!(compute_overtime_pay(0.0, 12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_monotonic_in_hours() {
        let mut last = 0.0;
        for tenths in 0..=100 {
            let pay = compute_overtime_pay(4800.0, tenths as f64 / 10.0).unwrap();
            assert!(pay >= last);
            last = pay;
        }
    }

    #[test]
    fn test_custom_config() {
        let config = PayrollConfig {
            standard_monthly_hours: Decimal::from(200),
            overtime_multiplier: Decimal::from(2),
            ..PayrollConfig::default()
        };
        assert_eq!(compute_overtime_pay_with(4000.0, 3.0, &config).unwrap(), 120.0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            compute_overtime_pay(-1.0, 5.0),
            Err(PayrollError::InvalidAmount {
                field: "monthlySalary",
                ..
            })
        ));
        assert!(matches!(
            compute_overtime_pay(1000.0, f64::NAN),
            Err(PayrollError::InvalidAmount {
                field: "overtimeHours",
                ..
            })
        ));
    }

    #[test]
    fn test_salary_beyond_decimal_range_rejected() {
        assert!(matches!(
            compute_overtime_pay(1e30, 10.0),
            Err(PayrollError::InvalidAmount {
                field: "monthlySalary",
                ..
            })
        ));
    }

    #[test]
    fn test_overflowing_product_rejected() {
        assert!(matches!(
            compute_overtime_pay(1e27, 1e27),
            Err(PayrollError::InvalidAmount {
                field: "overtimeHours",
                ..
            })
        ));
    }
}
