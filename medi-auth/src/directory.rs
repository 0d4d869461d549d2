//! Account directory
//!
//! Storage is owned by the caller; the credential service only sees this
//! lookup/save interface.

use shared::AppResult;
use shared::models::Account;
use std::collections::HashMap;

/// Externally owned account store
pub trait AccountDirectory {
    /// Look up by login email (case-insensitive)
    fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Insert or replace the account with the same email
    fn save(&mut self, account: Account) -> AppResult<()>;
}

/// HashMap-backed directory keyed by normalized email
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    accounts: HashMap<String, Account>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts sorted by id
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|a| a.id);
        accounts
    }
}

impl FromIterator<Account> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self {
            accounts: iter
                .into_iter()
                .map(|a| (Account::normalize_email(&a.email), a))
                .collect(),
        }
    }
}

impl AccountDirectory for InMemoryDirectory {
    fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(&Account::normalize_email(email)).cloned())
    }

    fn save(&mut self, account: Account) -> AppResult<()> {
        self.accounts
            .insert(Account::normalize_email(&account.email), account);
        Ok(())
    }
}
