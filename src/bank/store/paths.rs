use std::path::{Path, PathBuf};

pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.csv";
pub const DEFAULT_HISTORY_FILE: &str = "transaction_history.csv";

/// Locations of the snapshot and history files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub accounts: PathBuf,
    pub history: PathBuf,
}

impl StorePaths {
    pub fn new(accounts: impl Into<PathBuf>, history: impl Into<PathBuf>) -> Self {
        return Self {
            accounts: accounts.into(),
            history: history.into(),
        };
    }

    /// Default file names, placed under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        return Self::new(dir.join(DEFAULT_ACCOUNTS_FILE), dir.join(DEFAULT_HISTORY_FILE));
    }
}

impl Default for StorePaths {
    fn default() -> Self {
        return Self::new(DEFAULT_ACCOUNTS_FILE, DEFAULT_HISTORY_FILE);
    }
}
