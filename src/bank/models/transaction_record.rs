use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};

/// Second-granularity wall-clock format used on screen and in the history file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single entry in an account's transaction log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    timestamp: NaiveDateTime,
    description: String,
}

impl TransactionRecord {
    pub fn new(timestamp: NaiveDateTime, description: impl Into<String>) -> Self {
        // Sub-second precision would not survive a trip through the history file
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);

        return Self {
            timestamp,
            description: description.into(),
        };
    }

    pub fn now(description: impl Into<String>) -> Self {
        return Self::new(Local::now().naive_local(), description);
    }

    pub fn parse(
        timestamp: &str,
        description: impl Into<String>,
    ) -> Result<Self, chrono::ParseError> {
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)?;
        return Ok(Self::new(timestamp, description));
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        return self.timestamp;
    }

    pub fn formatted_timestamp(&self) -> String {
        return self.timestamp.format(TIMESTAMP_FORMAT).to_string();
    }

    pub fn description(&self) -> &str {
        return &self.description;
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}: {}", self.formatted_timestamp(), self.description);
    }
}
