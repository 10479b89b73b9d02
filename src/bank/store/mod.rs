//! Flat-file persistence: a snapshot file holding one row per account, and an
//! append-only history file holding one row per transaction.

mod history;
mod paths;
mod snapshot;

pub use history::{append_history, read_history, write_history, HistoryRow};
pub use paths::{StorePaths, DEFAULT_ACCOUNTS_FILE, DEFAULT_HISTORY_FILE};
pub use snapshot::{read_accounts, save_accounts, write_accounts, SNAPSHOT_HEADER};

use crate::models::Accounts;
use crate::Result;

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use anyhow::Context;

use csv::{Reader, ReaderBuilder, Trim};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Couldn't open {0} for reading")]
    Open(String),

    #[error("Couldn't write to {0}")]
    Write(String),
}

/// Loads every account from the snapshot file, then replays the history file
/// into their transaction logs. Missing files count as empty.
pub fn load(paths: &StorePaths) -> Result<Accounts> {
    let accounts_file = match open_if_exists(&paths.accounts)? {
        Some(file) => file,
        None => {
            log::debug!("No accounts file at {:?}, starting empty", paths.accounts);
            return Ok(Accounts::new());
        }
    };

    let mut accounts = read_accounts(accounts_file)?;
    log::debug!("Loaded {} accounts from {:?}", accounts.len(), paths.accounts);

    match open_if_exists(&paths.history)? {
        Some(history_file) => {
            let replayed = read_history(history_file, &mut accounts)?;
            log::debug!("Replayed {replayed} transactions from {:?}", paths.history);
        }
        None => log::debug!("No history file at {:?}", paths.history),
    }

    return Ok(accounts);
}

fn open_if_exists(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| StoreError::Open(path.display().to_string())),
    }
}

fn build_csv_reader<R: Read>(reader: R, has_headers: bool) -> Reader<R> {
    return ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);
}
