use crate::policy::{PasswordPolicy, SPECIAL_CHARACTERS};

/// Credential policy configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PASSWORD_VALIDITY_DAYS | 30 | 密码有效期(天) |
/// | PASSWORD_EXPIRY_WARNING_DAYS | 7 | 到期提醒阈值(天) |
/// | PASSWORD_MIN_LENGTH | 8 | 最小长度 |
/// | PASSWORD_SPECIAL_CHARACTERS | [`SPECIAL_CHARACTERS`] | 特殊字符集 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Days a password stays valid after a change
    pub validity_days: i64,
    /// Expiry warnings are reported once this many days or fewer remain
    pub expiry_warning_days: i64,
    /// Strength rules applied on every password change
    pub password: PasswordPolicy,
}

impl PolicyConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source; `from_env` passes `std::env::var`
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            validity_days: get("PASSWORD_VALIDITY_DAYS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|days: &i64| *days > 0)
                .unwrap_or(defaults.validity_days),
            expiry_warning_days: get("PASSWORD_EXPIRY_WARNING_DAYS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|days: &i64| *days >= 0)
                .unwrap_or(defaults.expiry_warning_days),
            password: PasswordPolicy {
                min_length: get("PASSWORD_MIN_LENGTH")
                    .and_then(|v| v.trim().parse().ok())
                    .filter(|len: &usize| *len > 0)
                    .unwrap_or(defaults.password.min_length),
                special_characters: get("PASSWORD_SPECIAL_CHARACTERS")
                    .filter(|v| !v.is_empty())
                    .unwrap_or(defaults.password.special_characters),
            },
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            validity_days: 30,
            expiry_warning_days: 7,
            password: PasswordPolicy {
                min_length: 8,
                special_characters: SPECIAL_CHARACTERS.to_string(),
            },
        }
    }
}
