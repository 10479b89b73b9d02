use super::{build_csv_reader, StoreError};

use crate::models::{Account, Accounts, ACCOUNT_COLUMNS};
use crate::Result;

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use anyhow::Context;

use csv::WriterBuilder;

pub const SNAPSHOT_HEADER: [&str; ACCOUNT_COLUMNS] = ["Account Number", "Password", "Balance"];

/// Writes the header followed by one row per account
pub fn write_accounts<W: Write>(writer: W, accounts: &Accounts) -> Result {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(SNAPSHOT_HEADER)?;

    for account in accounts.iter() {
        wtr.serialize(account.to_row())?;
    }

    wtr.flush()?;

    return Ok(());
}

/// Replaces the snapshot file at `path` with the current state of `accounts`
pub fn save_accounts(path: &Path, accounts: &Accounts) -> Result {
    log::debug!("Saving {} accounts to {path:?}", accounts.len());

    let file =
        File::create(path).with_context(|| StoreError::Write(path.display().to_string()))?;

    write_accounts(file, accounts)
        .with_context(|| StoreError::Write(path.display().to_string()))?;

    return Ok(());
}

/// Reads a snapshot, skipping the header row.
///
/// Malformed rows and rows repeating an already loaded identifier are logged
/// and skipped; only I/O failures abort the read.
pub fn read_accounts<R: Read>(reader: R) -> Result<Accounts> {
    let mut rdr = build_csv_reader(reader, true);
    let mut accounts = Accounts::new();

    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => Err(e)?,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let account = match Account::from_row(&record) {
            Ok(account) => account,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = accounts.insert(account) {
            log::warn!("Skipping row on line {}: {e}", line_of(&record));
        }
    }

    return Ok(accounts);
}

fn line_of(record: &csv::StringRecord) -> u64 {
    return record.position().map(|pos| pos.line()).unwrap_or(0);
}
