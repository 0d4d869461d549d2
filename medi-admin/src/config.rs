use medi_auth::PolicyConfig;
use medi_payroll::PayrollConfig;

/// medi-admin 配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，存在时按天滚动写入文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// 密码策略和加班参数见 [`PolicyConfig`] 与 [`PayrollConfig`]。
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    pub policy: PolicyConfig,
    pub payroll: PayrollConfig,
}

impl AdminConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|v| !v.trim().is_empty()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            policy: PolicyConfig::from_lookup(&get),
            payroll: PayrollConfig::from_lookup(&get),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            policy: PolicyConfig::default(),
            payroll: PayrollConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_flag() {
        let mut config = AdminConfig::default();
        assert!(!config.is_production());
        config.environment = "Production".into();
        assert!(config.is_production());
    }

    #[test]
    fn test_from_lookup() {
        let config = AdminConfig::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("debug".to_string()),
            "LOG_DIR" => Some("  ".to_string()),
            "ENVIRONMENT" => Some("production".to_string()),
            "PASSWORD_MIN_LENGTH" => Some("10".to_string()),
            "OVERTIME_MULTIPLIER" => Some("2".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, None);
        assert!(config.is_production());
        assert_eq!(config.policy.password.min_length, 10);
        assert_eq!(config.payroll.overtime_multiplier.to_string(), "2");
    }
}
