use thiserror::Error;

/// A persisted row that could not be turned back into in-memory state.
/// Rows are identified by line number only, since they may hold passwords.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("Skipping malformed row on line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Skipping malformed row on line {line}: {reason}")]
    InvalidField { line: u64, reason: String },
}
