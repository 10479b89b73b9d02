mod account;
mod accounts;
mod row_error;
mod transaction_record;
mod transactions;
mod withdrawal;

pub use account::{Account, AccountRow, ACCOUNT_COLUMNS};
pub use accounts::{Accounts, AccountsError};
pub use row_error::RowError;
pub use transaction_record::{TransactionRecord, TIMESTAMP_FORMAT};
pub use transactions::Transactions;
pub use withdrawal::Withdrawal;
