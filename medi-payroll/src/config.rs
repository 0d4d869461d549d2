use rust_decimal::Decimal;
use std::str::FromStr;

/// Payroll constants
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | STANDARD_DAILY_HOURS | 8 | 每日标准工时 |
/// | STANDARD_MONTHLY_HOURS | 160 | 每月标准工时 (8h × 20天) |
/// | OVERTIME_MULTIPLIER | 1.5 | 加班倍率 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    /// Hours per day before overtime starts
    pub standard_daily_hours: Decimal,
    /// Divisor turning a monthly salary into an hourly rate
    pub standard_monthly_hours: Decimal,
    /// Overtime rate = hourly rate × multiplier
    pub overtime_multiplier: Decimal,
}

impl PayrollConfig {
    /// 从环境变量加载配置
    ///
    /// Unset, unparsable or non-positive values fall back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source; `from_env` passes `std::env::var`
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            standard_daily_hours: positive(get("STANDARD_DAILY_HOURS"))
                .unwrap_or(defaults.standard_daily_hours),
            standard_monthly_hours: positive(get("STANDARD_MONTHLY_HOURS"))
                .unwrap_or(defaults.standard_monthly_hours),
            overtime_multiplier: positive(get("OVERTIME_MULTIPLIER"))
                .unwrap_or(defaults.overtime_multiplier),
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            standard_daily_hours: Decimal::from(8),
            standard_monthly_hours: Decimal::from(160),
            overtime_multiplier: Decimal::new(15, 1),
        }
    }
}

fn positive(value: Option<String>) -> Option<Decimal> {
    value
        .and_then(|v| Decimal::from_str(v.trim()).ok())
        .filter(|v| v.is_sign_positive() && !v.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PayrollConfig::default();
        assert_eq!(config.standard_daily_hours, Decimal::from(8));
        assert_eq!(config.standard_monthly_hours, Decimal::from(160));
        assert_eq!(config.overtime_multiplier.to_string(), "1.5");
    }

    #[test]
    fn test_from_lookup() {
        let config = PayrollConfig::from_lookup(|key| match key {
            "STANDARD_DAILY_HOURS" => Some("7.5".to_string()),
            "STANDARD_MONTHLY_HOURS" => Some(" 150 ".to_string()),
            "OVERTIME_MULTIPLIER" => Some("2".to_string()),
            _ => None,
        });
        assert_eq!(config.standard_daily_hours, Decimal::new(75, 1));
        assert_eq!(config.standard_monthly_hours, Decimal::from(150));
        assert_eq!(config.overtime_multiplier, Decimal::from(2));
    }

    #[test]
    fn test_from_lookup_rejects_non_positive_and_garbage() {
        let config = PayrollConfig::from_lookup(|key| match key {
            "STANDARD_DAILY_HOURS" => Some("0".to_string()),
            "STANDARD_MONTHLY_HOURS" => Some("-160".to_string()),
            "OVERTIME_MULTIPLIER" => Some("one and a half".to_string()),
            _ => None,
        });
        assert_eq!(config, PayrollConfig::default());
    }
}
