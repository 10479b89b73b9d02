use super::TransactionRecord;

/// Append-only, chronologically ordered transaction log of one account.
///
/// Tracks how many records have already been written to the history file, so
/// that appending to it only ever writes each record once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transactions {
    records: Vec<TransactionRecord>,
    flushed: usize,
}

impl Transactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new transaction that has not been persisted yet
    pub fn push(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Records a transaction read back from the history file
    pub fn replay(&mut self, record: TransactionRecord) {
        self.records.insert(self.flushed, record);
        self.flushed += 1;
    }

    pub fn all(&self) -> &[TransactionRecord] {
        return &self.records;
    }

    pub fn unflushed(&self) -> &[TransactionRecord] {
        return &self.records[self.flushed..];
    }

    pub fn mark_flushed(&mut self) {
        self.flushed = self.records.len();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_record(description: &str) -> TransactionRecord {
        TransactionRecord::parse("2023-01-01 10:00:00", description).unwrap()
    }

    #[test]
    fn push() {
        let mut transactions = Transactions::new();
        assert!(transactions.is_empty());

        transactions.push(build_record("first"));
        transactions.push(build_record("second"));

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions.all()[0].description(), "first");
        assert_eq!(transactions.all()[1].description(), "second");
        assert_eq!(transactions.unflushed().len(), 2);
    }

    #[test]
    fn mark_flushed() {
        let mut transactions = Transactions::new();

        transactions.push(build_record("first"));
        transactions.mark_flushed();

        assert!(transactions.unflushed().is_empty());

        transactions.push(build_record("second"));

        assert_eq!(transactions.unflushed(), &[build_record("second")]);
        assert_eq!(transactions.len(), 2);
    }

    #[test]
    fn replay() {
        let mut transactions = Transactions::new();

        transactions.replay(build_record("first"));
        transactions.replay(build_record("second"));

        assert!(transactions.unflushed().is_empty());
        assert_eq!(
            transactions.all(),
            &[build_record("first"), build_record("second")]
        );
    }

    #[test]
    fn replay_keeps_unflushed_records_pending() {
        let mut transactions = Transactions::new();

        transactions.push(build_record("new"));
        transactions.replay(build_record("old"));

        assert_eq!(transactions.all(), &[build_record("old"), build_record("new")]);
        assert_eq!(transactions.unflushed(), &[build_record("new")]);
    }
}
