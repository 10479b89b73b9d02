use super::{RowError, TransactionRecord, Transactions, Withdrawal};

use crate::ids::AccountId;
use crate::Money;

use csv::StringRecord;

use serde::{Deserialize, Serialize};

/// Number of columns in a snapshot row: identifier, password, balance
pub const ACCOUNT_COLUMNS: usize = 3;

/// Snapshot-file representation of an account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountRow(pub AccountId, pub String, pub Money);

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    password: String,
    balance: Money,
    transactions: Transactions,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, password: impl Into<String>) -> Self {
        return Self::with_balance(id, password, Money::ZERO);
    }

    pub fn with_balance(
        id: impl Into<AccountId>,
        password: impl Into<String>,
        balance: Money,
    ) -> Self {
        return Self {
            id: id.into(),
            password: password.into(),
            balance,
            transactions: Transactions::new(),
        };
    }

    pub fn id(&self) -> &AccountId {
        return &self.id;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    /// Adds `amount` to the balance. The amount is taken as given, so zero or
    /// negative deposits are recorded too.
    pub fn deposit(&mut self, amount: Money) -> String {
        self.balance.add(&amount);

        let description = format!("Deposited {amount}. Current balance: {}", self.balance);
        log::debug!("Account {}: {description}", self.id);

        self.transactions.push(TransactionRecord::now(description.clone()));

        return description;
    }

    /// Takes `amount` out of the balance if it is covered. When a password is
    /// given it must match before anything else is checked.
    pub fn withdraw(&mut self, amount: Money, password: Option<&str>) -> Withdrawal {
        if let Some(password) = password {
            if !self.verify_password(password) {
                log::debug!("Account {}: withdrawal denied", self.id);
                return Withdrawal::Denied;
            }
        }

        if !(amount.0 <= self.balance.0) {
            log::debug!(
                "Account {}: cannot withdraw {amount} from balance {}",
                self.id,
                self.balance
            );
            return Withdrawal::InsufficientFunds;
        }

        self.balance.sub(&amount);

        let outcome = Withdrawal::Completed {
            amount,
            balance: self.balance,
        };
        log::debug!("Account {}: {outcome}", self.id);

        self.transactions.push(TransactionRecord::now(outcome.to_string()));

        return outcome;
    }

    pub fn balance_summary(&self) -> String {
        return format!("Account balance for account {}: {}", self.id, self.balance);
    }

    pub fn transaction_history(&self) -> &[TransactionRecord] {
        return self.transactions.all();
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        return self.password == candidate;
    }

    pub fn transactions(&self) -> &Transactions {
        return &self.transactions;
    }

    pub(crate) fn transactions_mut(&mut self) -> &mut Transactions {
        return &mut self.transactions;
    }

    pub fn to_row(&self) -> AccountRow {
        return AccountRow(self.id.clone(), self.password.clone(), self.balance);
    }

    /// Rebuilds an account from a snapshot row, without any transaction history
    pub fn from_row(record: &StringRecord) -> Result<Self, RowError> {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        if record.len() != ACCOUNT_COLUMNS {
            return Err(RowError::ColumnCount {
                line,
                expected: ACCOUNT_COLUMNS,
                found: record.len(),
            });
        }

        let row: AccountRow = record
            .deserialize(None)
            .map_err(|e| RowError::InvalidField {
                line,
                reason: e.to_string(),
            })?;

        return Ok(Self::from(row));
    }
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        let AccountRow(id, password, balance) = row;
        return Self::with_balance(id, password, balance);
    }
}
