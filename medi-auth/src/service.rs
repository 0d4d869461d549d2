//! Credential service (账号认证)
//!
//! Per-account state machine:
//!
//! ```text
//! Active(first_login) --login--> AwaitingPasswordChange(FirstLogin)
//! Active --login after expiry--> AwaitingPasswordChange(Expired)
//! AwaitingPasswordChange --valid change--> Active(!first_login)
//! any --admin reset--> Active(first_login) with a fresh onboarding secret
//! ```

use serde::Serialize;
use shared::models::{Account, CredentialRecord, NewAccount};
use shared::util::snowflake_id_at;

use crate::config::PolicyConfig;
use crate::directory::AccountDirectory;
use crate::error::{AuthError, AuthResult};
use crate::expiry::{expiry_after, expiry_warning, is_expired};
use crate::hasher::{SecretHasher, Sha256Hasher};
use crate::secret::{IssuedSecret, SecretGenerator, StaticSecret};

/// Why the holder must change the password before going further
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeReason {
    FirstLogin,
    Expired,
}

/// Successful authentication result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Normal access; `expiry_warning` carries the days left when the
    /// password expires soon
    Authenticated {
        account: Account,
        expiry_warning: Option<i64>,
    },
    /// Secret matched but a password change must complete first
    PasswordChangeRequired {
        account: Account,
        reason: ChangeReason,
    },
}

/// Password change request
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Change required for `record` at `now`, if any
///
/// Expiry wins over the first-login flag.
pub fn required_change(record: &CredentialRecord, now: i64) -> Option<ChangeReason> {
    if is_expired(record.password_expires_at, now) {
        Some(ChangeReason::Expired)
    } else if record.first_login {
        Some(ChangeReason::FirstLogin)
    } else {
        None
    }
}

/// Provisioning, login, password change and admin reset
pub struct CredentialService<D> {
    directory: D,
    config: PolicyConfig,
    hasher: Box<dyn SecretHasher>,
    generator: Box<dyn SecretGenerator>,
}

impl<D: AccountDirectory> CredentialService<D> {
    /// Service with the deterministic hasher and the static onboarding secret
    pub fn new(directory: D, config: PolicyConfig) -> Self {
        Self {
            directory,
            config,
            hasher: Box::new(Sha256Hasher),
            generator: Box::new(StaticSecret::default()),
        }
    }

    pub fn with_hasher(mut self, hasher: impl SecretHasher + 'static) -> Self {
        self.hasher = Box::new(hasher);
        self
    }

    pub fn with_generator(mut self, generator: impl SecretGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Fresh credential record for a password (re)issued at `now`
    fn issue_record(&self, secret: &str, first_login: bool, now: i64) -> AuthResult<CredentialRecord> {
        Ok(CredentialRecord {
            password_hash: self.hasher.hash(secret)?,
            first_login,
            password_changed_at: now,
            password_expires_at: expiry_after(now, self.config.validity_days),
        })
    }

    /// Onboarding secret for `display_name`, checked against the policy
    fn issue_secret(&self, display_name: &str) -> AuthResult<String> {
        let secret = self.generator.generate();
        let validation = self.config.password.validate(&secret, display_name);
        if !validation.valid {
            return Err(AuthError::WeakOnboardingSecret(validation.messages()));
        }
        Ok(secret)
    }

    /// Create an account with an onboarding secret
    ///
    /// The returned secret is shown to the administrator once; only its hash
    /// is stored.
    pub fn provision(&mut self, new: NewAccount, now: i64) -> AuthResult<(Account, IssuedSecret)> {
        if self.directory.find_by_email(&new.email)?.is_some() {
            return Err(AuthError::EmailExists(new.email));
        }

        let secret = self.issue_secret(&new.display_name)?;
        let account = Account {
            id: snowflake_id_at(now),
            email: new.email.trim().to_string(),
            display_name: new.display_name,
            role: new.role,
            is_active: true,
            credential: self.issue_record(&secret, true, now)?,
        };
        self.directory.save(account.clone())?;

        tracing::info!(
            account_id = account.id,
            email = %account.email,
            role = %account.role,
            "Account provisioned"
        );

        Ok((account, IssuedSecret::new(secret)))
    }

    /// Look up and verify; unknown email and wrong secret are the same error
    fn verified_account(&self, email: &str, secret: &str) -> AuthResult<Account> {
        let Some(account) = self.directory.find_by_email(email)? else {
            tracing::warn!(email = %email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(secret, &account.credential.password_hash)? {
            tracing::warn!(email = %email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        if !account.is_active {
            return Err(AuthError::AccountDisabled);
        }

        Ok(account)
    }

    /// Authenticate a login attempt
    pub fn authenticate(&self, email: &str, secret: &str, now: i64) -> AuthResult<LoginOutcome> {
        let account = self.verified_account(email, secret)?;

        if let Some(reason) = required_change(&account.credential, now) {
            tracing::info!(
                account_id = account.id,
                reason = ?reason,
                "Password change required"
            );
            return Ok(LoginOutcome::PasswordChangeRequired { account, reason });
        }

        let warning = expiry_warning(
            account.credential.password_expires_at,
            now,
            self.config.expiry_warning_days,
        );
        if let Some(days_left) = warning {
            tracing::warn!(account_id = account.id, days_left, "Password expires soon");
        }

        tracing::info!(
            account_id = account.id,
            role = %account.role,
            "User logged in successfully"
        );

        Ok(LoginOutcome::Authenticated {
            account,
            expiry_warning: warning,
        })
    }

    /// Replace the password after checking the current one
    ///
    /// Every policy violation is reported together, with the confirmation
    /// mismatch appended; a mismatch alone is [`AuthError::PasswordMismatch`].
    /// Nothing is written unless the request is fully valid.
    pub fn change_password(&mut self, req: PasswordChange, now: i64) -> AuthResult<Account> {
        let mut account = self.verified_account(&req.email, &req.current_password)?;

        let validation = self
            .config
            .password
            .validate(&req.new_password, &account.display_name);
        let mismatch = req.new_password != req.confirm_password;
        if !validation.valid {
            let mut messages = validation.messages();
            if mismatch {
                messages.push(AuthError::PasswordMismatch.to_string());
            }
            return Err(AuthError::PolicyViolation(messages));
        }
        if mismatch {
            return Err(AuthError::PasswordMismatch);
        }

        account.credential = self.issue_record(&req.new_password, false, now)?;
        self.directory.save(account.clone())?;

        tracing::info!(account_id = account.id, "Password changed");
        Ok(account)
    }

    /// Admin reset to a fresh onboarding secret
    pub fn reset_password(
        &mut self,
        admin_email: &str,
        target_email: &str,
        now: i64,
    ) -> AuthResult<IssuedSecret> {
        let admin = self
            .directory
            .find_by_email(admin_email)?
            .filter(|a| a.is_active && a.role.is_admin())
            .ok_or(AuthError::AdminRequired)?;

        let mut target = self
            .directory
            .find_by_email(target_email)?
            .ok_or_else(|| AuthError::EmployeeNotFound(target_email.to_string()))?;

        let secret = self.issue_secret(&target.display_name)?;
        target.credential = self.issue_record(&secret, true, now)?;
        self.directory.save(target.clone())?;

        tracing::info!(
            admin_id = admin.id,
            account_id = target.id,
            "Password reset to onboarding secret"
        );

        Ok(IssuedSecret::new(secret))
    }
}
