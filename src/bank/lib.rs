pub mod ids;
pub mod models;
mod money;
mod result;
pub mod shell;
pub mod store;

pub use models::{Account, Accounts, TransactionRecord, Withdrawal};
pub use money::{Money, MoneyError};
pub use result::Result;
