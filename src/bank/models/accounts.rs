use super::Account;

use crate::ids::AccountId;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountsError {
    #[error("Account already exists: {0}")]
    AlreadyExists(AccountId),
}

/// The in-memory account collection, kept in creation order.
///
/// Lookups are linear scans; identifiers are unique within the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accounts {
    accounts: Vec<Account>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &str) -> Option<&Account> {
        return self.accounts.iter().find(|account| account.id() == id);
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Account> {
        return self.accounts.iter_mut().find(|account| account.id() == id);
    }

    pub fn exists(&self, id: &str) -> bool {
        return self.find(id).is_some();
    }

    pub fn create(&mut self, id: &str, password: &str) -> Result<&mut Account> {
        return self.insert(Account::new(id, password));
    }

    pub fn insert(&mut self, account: Account) -> Result<&mut Account> {
        if self.exists(account.id().as_str()) {
            Err(AccountsError::AlreadyExists(account.id().clone()))?
        }

        let index = self.accounts.len();
        self.accounts.push(account);

        return Ok(&mut self.accounts[index]);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        return self.accounts.iter();
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
