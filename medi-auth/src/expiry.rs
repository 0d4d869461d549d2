//! Password expiry (密码有效期)
//!
//! All timestamps are Unix millis.

use shared::util::DAY_MILLIS;

/// Default validity window after a password change
pub const PASSWORD_VALIDITY_DAYS: i64 = 30;

/// Expiry timestamp for a password changed at `now`
pub fn compute_expiry(now: i64) -> i64 {
    expiry_after(now, PASSWORD_VALIDITY_DAYS)
}

/// Expiry timestamp for a custom validity window
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn expiry_after(now: i64, validity_days: i64) -> i64 {
    now.saturating_add(validity_days.saturating_mul(DAY_MILLIS))
}

/// `now > expiry`; a password is still valid at the exact expiry instant
pub fn is_expired(expiry: i64, now: i64) -> bool {
    now > expiry
}

/// Whole days left, rounded up; zero or negative once expired
pub fn days_until_expiry(expiry: i64, now: i64) -> i64 {
    let remaining = expiry.saturating_sub(now);
    let days = remaining / DAY_MILLIS;
    // Integer division truncates toward zero, which is already the ceiling
    // for negative values
    if remaining > 0 && remaining % DAY_MILLIS != 0 {
        days + 1
    } else {
        days
    }
}

/// Reporting hook for the login screen
///
/// Returns the days left when the password expires within `warning_days`
/// and has not expired yet.
pub fn expiry_warning(expiry: i64, now: i64, warning_days: i64) -> Option<i64> {
    if is_expired(expiry, now) {
        return None;
    }
    let days_left = days_until_expiry(expiry, now);
    (days_left <= warning_days).then_some(days_left)
}
