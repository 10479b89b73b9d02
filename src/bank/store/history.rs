use super::{build_csv_reader, StoreError};

use crate::ids::AccountId;
use crate::models::{Account, Accounts, RowError, TransactionRecord};
use crate::Result;

use std::{
    fs::OpenOptions,
    io::{Read, Write},
    path::Path,
};

use anyhow::Context;

use csv::{StringRecord, WriterBuilder};

use serde::{Deserialize, Serialize};

const HISTORY_COLUMNS: usize = 3;

/// History-file representation of a transaction: identifier, timestamp, description
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryRow(pub AccountId, pub String, pub String);

impl HistoryRow {
    fn new(id: &AccountId, record: &TransactionRecord) -> Self {
        return Self(
            id.clone(),
            record.formatted_timestamp(),
            record.description().to_string(),
        );
    }
}

/// Writes the account's not yet flushed transactions, returning how many were written
pub fn write_history<W: Write>(writer: W, account: &Account) -> Result<usize> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    let unflushed = account.transactions().unflushed();

    for record in unflushed {
        wtr.serialize(HistoryRow::new(account.id(), record))?;
    }

    wtr.flush()?;

    return Ok(unflushed.len());
}

/// Appends the account's new transactions to the history file at `path` and
/// marks them as flushed. Calling it again without new transactions writes nothing.
pub fn append_history(path: &Path, account: &mut Account) -> Result<usize> {
    if account.transactions().unflushed().is_empty() {
        log::debug!("Nothing to append for account {}", account.id());
        return Ok(0);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| StoreError::Write(path.display().to_string()))?;

    let written = write_history(file, account)
        .with_context(|| StoreError::Write(path.display().to_string()))?;

    account.transactions_mut().mark_flushed();

    log::debug!("Appended {written} transactions for account {} to {path:?}", account.id());

    return Ok(written);
}

/// Replays history rows into the matching accounts, in file order.
///
/// Returns the number of rows replayed. Malformed rows are logged and skipped,
/// rows for unknown accounts are ignored.
pub fn read_history<R: Read>(reader: R, accounts: &mut Accounts) -> Result<usize> {
    let mut rdr = build_csv_reader(reader, false);
    let mut replayed = 0;

    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => Err(e)?,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let (id, transaction) = match parse_history_row(&record) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        match accounts.find_mut(id.as_str()) {
            Some(account) => {
                account.transactions_mut().replay(transaction);
                replayed += 1;
            }
            None => log::debug!("Ignoring history for unknown account {id}"),
        }
    }

    return Ok(replayed);
}

fn parse_history_row(
    record: &StringRecord,
) -> std::result::Result<(AccountId, TransactionRecord), RowError> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);

    if record.len() != HISTORY_COLUMNS {
        return Err(RowError::ColumnCount {
            line,
            expected: HISTORY_COLUMNS,
            found: record.len(),
        });
    }

    let row: HistoryRow = record
        .deserialize(None)
        .map_err(|e| RowError::InvalidField {
            line,
            reason: e.to_string(),
        })?;
    let HistoryRow(id, timestamp, description) = row;

    let transaction =
        TransactionRecord::parse(&timestamp, description).map_err(|e| RowError::InvalidField {
            line,
            reason: format!("invalid timestamp {timestamp:?}: {e}"),
        })?;

    return Ok((id, transaction));
}
