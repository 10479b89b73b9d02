use crate::Money;

use std::fmt;

/// Outcome of a withdrawal attempt. Only `Completed` changes the account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Withdrawal {
    Completed { amount: Money, balance: Money },
    Denied,
    InsufficientFunds,
}

impl Withdrawal {
    pub fn is_completed(&self) -> bool {
        return matches!(self, Withdrawal::Completed { .. });
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Withdrawal::Completed { amount, balance } => {
                write!(f, "Withdrew {amount}. Current balance: {balance}")
            }
            Withdrawal::Denied => write!(f, "Incorrect password. Withdrawal denied."),
            Withdrawal::InsufficientFunds => write!(f, "Insufficient funds!"),
        }
    }
}
